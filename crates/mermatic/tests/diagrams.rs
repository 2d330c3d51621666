//! End-to-end scenarios across the diagram catalogue.

use mermatic::{DiagramConfig, GanttTask, Mode, PacketDiagram, Priority, TaskMetadata, Theme};

#[test]
fn zero_item_builders_render_the_keyword_line_alone() {
    assert_eq!(mermatic::packet(None, None).build(), "packet");
    assert_eq!(mermatic::sankey(None, None).build(), "sankey");
    assert_eq!(mermatic::kanban(None, None).build(), "kanban");
    assert_eq!(mermatic::timeline(None, None).build(), "timeline");
    assert_eq!(mermatic::journey(None, None).build(), "journey");
    assert_eq!(mermatic::xychart(None, None).build(), "xychart");
    assert_eq!(mermatic::pie(None, None).build(), "pie");
    // Gantt always declares its date format.
    assert_eq!(
        mermatic::gantt(None, None).build(),
        "gantt\n    dateFormat YYYY-MM-DD"
    );
}

#[test]
fn no_output_ends_with_a_line_terminator() {
    let outputs = [
        mermatic::packet(Some("P"), None).build(),
        mermatic::sankey(None, None)
            .add_flow("A", "B", 1.0)
            .unwrap()
            .build(),
        mermatic::pie(Some("Pets"), Some(DiagramConfig::new().with_theme(Theme::Dark)))
            .add_slice("Dogs", 1.0)
            .unwrap()
            .build(),
    ];
    for output in outputs {
        assert!(!output.ends_with('\n'), "trailing terminator in {output:?}");
    }
}

#[test]
fn frontmatter_presence_is_exactly_title_or_non_default_config() {
    // Neither: no block.
    assert_eq!(mermatic::sankey(None, None).build(), "sankey");

    // Default config counts as absent.
    let text = mermatic::sankey(None, Some(DiagramConfig::default())).build();
    assert_eq!(text, "sankey");

    // Title alone.
    let text = mermatic::sankey(Some("Energy"), None).build();
    assert_eq!(text, "---\ntitle: Energy\n---\nsankey");

    // Non-default config alone.
    let config = DiagramConfig::new().with_theme(Theme::Forest);
    let text = mermatic::sankey(None, Some(config)).build();
    assert_eq!(text, "---\nconfig:\n  theme: forest\n---\nsankey");
}

#[test]
fn build_is_idempotent_on_an_untouched_builder() {
    let diagram = mermatic::kanban(Some("Board"), None)
        .add_column_with("Todo", |col| {
            col.task_with(
                "Ship it",
                TaskMetadata::new()
                    .with_assigned("Nora")
                    .with_priority(Priority::High),
            )
        })
        .unwrap();
    assert_eq!(diagram.build(), diagram.build());
}

#[test]
fn sankey_end_to_end_scenario() {
    let text = mermatic::sankey(None, None)
        .add_flow("A", "B", 10.0)
        .unwrap()
        .add_empty_line()
        .add_flow("B", "C", 20.0)
        .unwrap()
        .add_flow("C", "D", 30.0)
        .unwrap()
        .build();
    assert_eq!(text, "sankey\nA,B,10\n\nB,C,20\nC,D,30");
}

#[test]
fn gantt_end_to_end_scenario() {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    let text = mermatic::gantt(Some("Release plan"), None)
        .add_section("Build")
        .unwrap()
        .add_task("Implement", GanttTask::starting(start).days(10).id("impl"))
        .unwrap()
        .add_task("Review", GanttTask::after("impl").days(3))
        .unwrap()
        .add_milestone("Ship", chrono::NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
        .unwrap()
        .build();
    let expected = [
        "---",
        "title: Release plan",
        "---",
        "gantt",
        "    dateFormat YYYY-MM-DD",
        "    section Build",
        "        Implement :impl, 2024-03-04, 10d",
        "        Review :after impl, 3d",
        "        Ship :milestone, 2024-03-20, 0d",
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[test]
fn unsafe_builders_never_fail_and_pass_everything_through() {
    let text = mermatic::unchecked::packet(None, None)
        .add_field_with_end(-3, "")
        .unwrap()
        .add_field_with_bits(-2, None)
        .unwrap()
        .build();
    assert_eq!(text, "packet\n0--3: \"\"\n+-2: \"\"");
}

#[test]
fn builders_are_debuggable() {
    // Result combinators such as unwrap_err need the Ok side to be Debug.
    let diagram = mermatic::sankey(None, None).add_flow("A", "B", 1.0).unwrap();
    let rendered = format!("{diagram:?}");
    assert!(rendered.contains("Sankey"), "unexpected debug form: {rendered}");

    let err = mermatic::sankey(None, None)
        .add_flow(" ", "B", 1.0)
        .unwrap_err();
    assert_eq!(err, mermatic::BuildError::WhiteSpace { parameter: "source" });
}

#[test]
fn mode_taking_constructor_matches_the_factories() {
    let safe = PacketDiagram::new(None, None, Mode::Safe);
    assert_eq!(safe.mode(), Mode::Safe);
    assert!(safe.add_field_with_end(-1, "x").is_err());

    let loose = PacketDiagram::new(None, None, Mode::Unsafe);
    assert_eq!(
        loose.add_field_with_end(-1, "x").unwrap().build(),
        mermatic::unchecked::packet(None, None)
            .add_field_with_end(-1, "x")
            .unwrap()
            .build()
    );
}

#[test]
fn independent_builders_share_no_state() {
    let first = mermatic::pie(None, None).add_slice("A", 1.0).unwrap();
    let second = mermatic::pie(None, None).add_slice("B", 2.0).unwrap();
    assert_eq!(first.build(), "pie\n    \"A\" : 1");
    assert_eq!(second.build(), "pie\n    \"B\" : 2");
}
