//! User journey diagrams.
//!
//! Tasks carry a satisfaction score and the actors involved; sections open
//! an indentation scope exactly like the timeline kind. A task renders as
//! `{name}: {score}: {actor, actor}` with the actor list omitted when
//! empty.

use mermatic_core::{BuildError, guard, text::SectionIndent};

use crate::diagram::{Diagram, DiagramKind};

/// One appended construct in a user journey diagram.
#[derive(Debug, Clone)]
pub enum JourneyItem {
    /// A section header opening a new indentation scope.
    Section(String),
    /// A journey task.
    Task {
        /// Task name.
        name: String,
        /// Satisfaction score.
        score: i32,
        /// Actors involved, comma-joined in the output.
        actors: Vec<String>,
    },
}

/// Line-format strategy for user journey diagrams.
#[derive(Debug, Default)]
pub struct Journey;

/// A user journey builder; see [`crate::journey`] and [`crate::unchecked::journey`].
pub type JourneyDiagram = Diagram<Journey>;

impl DiagramKind for Journey {
    type Item = JourneyItem;

    const NAME: &'static str = "journey";

    fn keyword(&self) -> String {
        "journey".to_owned()
    }

    fn render(&self, items: &[Self::Item], lines: &mut Vec<String>) {
        let mut indent = SectionIndent::new();
        for item in items {
            match item {
                JourneyItem::Section(name) => {
                    lines.push(format!("{}section {name}", indent.section()));
                }
                JourneyItem::Task { name, score, actors } => {
                    let mut line = format!("{}{name}: {score}", indent.leaf());
                    if !actors.is_empty() {
                        line.push_str(": ");
                        line.push_str(&actors.join(", "));
                    }
                    lines.push(line);
                }
            }
        }
    }
}

impl JourneyDiagram {
    /// Appends a section header; subsequent tasks indent under it.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank name raises [`BuildError::WhiteSpace`].
    pub fn add_section(mut self, name: &str) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "name", name)?;
        self.push(JourneyItem::Section(name.to_owned()));
        Ok(self)
    }

    /// Appends a task with its score and actors.
    ///
    /// The actor list may be empty; the trailing segment is then omitted.
    ///
    /// # Errors
    ///
    /// In safe mode, blank names or actors raise
    /// [`BuildError::WhiteSpace`] and a negative score raises
    /// [`BuildError::StrictlyNegative`].
    ///
    /// # Examples
    ///
    /// ```
    /// let text = mermatic::journey(None, None)
    ///     .add_section("Morning").unwrap()
    ///     .add_task("Make tea", 5, &["Me"]).unwrap()
    ///     .build();
    /// assert_eq!(text, "journey\n    section Morning\n        Make tea: 5: Me");
    /// ```
    pub fn add_task(mut self, name: &str, score: i32, actors: &[&str]) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "name", name)?;
        guard::require_non_negative(self.mode(), "score", score.into())?;
        for actor in actors {
            guard::require_label(self.mode(), "actor", actor)?;
        }
        self.push(JourneyItem::Task {
            name: name.to_owned(),
            score,
            actors: actors.iter().map(|actor| (*actor).to_owned()).collect(),
        });
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use mermatic_core::BuildError;

    #[test]
    fn test_empty_journey_renders_keyword_only() {
        assert_eq!(crate::journey(None, None).build(), "journey");
    }

    #[test]
    fn test_sections_and_tasks_indent_by_state() {
        let text = crate::journey(None, None)
            .add_task("Wake up", 3, &[])
            .unwrap()
            .add_section("Work")
            .unwrap()
            .add_task("Do work", 1, &["Me", "Cat"])
            .unwrap()
            .build();
        let expected = [
            "journey",
            "    Wake up: 3",
            "    section Work",
            "        Do work: 1: Me, Cat",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_safe_mode_rejects_negative_score() {
        let err = crate::journey(None, None)
            .add_task("Sleep", -2, &["Me"])
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::StrictlyNegative {
                parameter: "score",
                value: -2.0
            }
        );
    }

    #[test]
    fn test_unsafe_mode_accepts_negative_score() {
        let text = crate::unchecked::journey(None, None)
            .add_task("Sleep", -2, &["Me"])
            .unwrap()
            .build();
        assert_eq!(text, "journey\n    Sleep: -2: Me");
    }
}
