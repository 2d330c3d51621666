//! Mermatic - Fluent builders that compile diagram models into Mermaid text.
//!
//! Each diagram kind has a factory that returns a single-use builder. The
//! builder accumulates items in call order; the terminal
//! [`build`](diagram::Diagram::build) walks the sequence once and returns
//! the finished text. Nothing is parsed back and nothing is rendered — the
//! output is plain text for a separate renderer.
//!
//! Builders come in two modes. The factories in the crate root validate
//! their arguments and fail fast with a typed [`BuildError`]; the parallel
//! factories in [`unchecked`] accept anything and pass it through to the
//! output verbatim. Both are shorthand for
//! [`Diagram::new`](diagram::Diagram::new), which takes the mode
//! explicitly.
//!
//! # Examples
//!
//! ```
//! let text = mermatic::sankey(None, None)
//!     .add_flow("A", "B", 10.0).unwrap()
//!     .add_empty_line()
//!     .add_flow("B", "C", 20.0).unwrap()
//!     .add_flow("C", "D", 30.0).unwrap()
//!     .build();
//! assert_eq!(text, "sankey\nA,B,10\n\nB,C,20\nC,D,30");
//! ```
//!
//! A title or a non-default [`DiagramConfig`] adds a frontmatter header:
//!
//! ```
//! use mermatic::{DiagramConfig, Theme};
//!
//! let config = DiagramConfig::new().with_theme(Theme::Dark);
//! let text = mermatic::pie(Some("Pets"), Some(config))
//!     .add_slice("Dogs", 386.0).unwrap()
//!     .build();
//! assert!(text.starts_with("---\ntitle: Pets\nconfig:\n  theme: dark\n---\npie"));
//! ```

pub mod diagram;

pub mod gantt;
pub mod journey;
pub mod kanban;
pub mod packet;
pub mod pie;
pub mod sankey;
pub mod timeline;
pub mod xychart;

pub use mermatic_core::{BuildError, ChartLayout, DiagramConfig, Look, Mode, Theme};

pub use gantt::{GanttDiagram, GanttItem, GanttTask, TaskTag};
pub use journey::{JourneyDiagram, JourneyItem};
pub use kanban::{KanbanColumn, KanbanDiagram, KanbanItem, KanbanTask, Priority, TaskMetadata};
pub use packet::{PacketDiagram, PacketItem};
pub use pie::{PieDiagram, PieItem};
pub use sankey::{SankeyDiagram, SankeyItem};
pub use timeline::{TimelineDiagram, TimelineItem};
pub use xychart::{XyChartDiagram, XyChartItem};

macro_rules! factories {
    ($($(#[$doc:meta])* $name:ident -> $builder:ty;)+) => {
        $(
            $(#[$doc])*
            pub fn $name(title: Option<&str>, config: Option<DiagramConfig>) -> $builder {
                <$builder>::new(title, config, Mode::Safe)
            }
        )+

        /// Factories pre-bound to [`Mode::Unsafe`].
        ///
        /// These mirror the crate-root factories exactly, but the builders
        /// they return never validate: blank labels, negative numbers, and
        /// empty collections are accepted and appear verbatim in the
        /// rendered text. Any resulting syntactic oddity is the caller's
        /// responsibility.
        pub mod unchecked {
            use super::*;

            $(
                $(#[$doc])*
                pub fn $name(title: Option<&str>, config: Option<DiagramConfig>) -> $builder {
                    <$builder>::new(title, config, Mode::Unsafe)
                }
            )+
        }
    };
}

factories! {
    /// Creates a packet layout builder.
    packet -> PacketDiagram;
    /// Creates a sankey flow builder.
    sankey -> SankeyDiagram;
    /// Creates a kanban board builder.
    kanban -> KanbanDiagram;
    /// Creates a timeline builder.
    timeline -> TimelineDiagram;
    /// Creates a user journey builder.
    journey -> JourneyDiagram;
    /// Creates an XY chart builder.
    xychart -> XyChartDiagram;
    /// Creates a pie chart builder.
    pie -> PieDiagram;
    /// Creates a gantt schedule builder.
    gantt -> GanttDiagram;
}
