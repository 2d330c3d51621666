//! Timeline diagrams.
//!
//! Sections open an indentation scope for the periods that follow; periods
//! declared before the first section sit at one indent unit. A period line
//! chains its events with ` : ` separators.

use mermatic_core::{BuildError, guard, text::SectionIndent};

use crate::diagram::{Diagram, DiagramKind};

/// One appended construct in a timeline diagram.
#[derive(Debug, Clone)]
pub enum TimelineItem {
    /// A section header opening a new indentation scope.
    Section(String),
    /// A time period and its events.
    Period {
        /// Period label (a year, a date, an era).
        label: String,
        /// Events chained onto the period line.
        events: Vec<String>,
    },
}

/// Line-format strategy for timeline diagrams.
#[derive(Debug, Default)]
pub struct Timeline;

/// A timeline diagram builder; see [`crate::timeline`] and [`crate::unchecked::timeline`].
pub type TimelineDiagram = Diagram<Timeline>;

impl DiagramKind for Timeline {
    type Item = TimelineItem;

    const NAME: &'static str = "timeline";

    fn keyword(&self) -> String {
        "timeline".to_owned()
    }

    fn render(&self, items: &[Self::Item], lines: &mut Vec<String>) {
        let mut indent = SectionIndent::new();
        for item in items {
            match item {
                TimelineItem::Section(name) => {
                    lines.push(format!("{}section {name}", indent.section()));
                }
                TimelineItem::Period { label, events } => {
                    let mut line = format!("{}{label}", indent.leaf());
                    for event in events {
                        line.push_str(" : ");
                        line.push_str(event);
                    }
                    lines.push(line);
                }
            }
        }
    }
}

impl TimelineDiagram {
    /// Appends a section header; subsequent periods indent under it.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank name raises [`BuildError::WhiteSpace`].
    pub fn add_section(mut self, name: &str) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "name", name)?;
        self.push(TimelineItem::Section(name.to_owned()));
        Ok(self)
    }

    /// Appends a period with no events.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank label raises [`BuildError::WhiteSpace`].
    pub fn add_period(mut self, label: &str) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "label", label)?;
        self.push(TimelineItem::Period {
            label: label.to_owned(),
            events: Vec::new(),
        });
        Ok(self)
    }

    /// Appends a period with its events.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank label or event raises
    /// [`BuildError::WhiteSpace`] and an empty event list raises
    /// [`BuildError::EmptyCollection`].
    ///
    /// # Examples
    ///
    /// ```
    /// let text = mermatic::timeline(None, None)
    ///     .add_period_with_events("2002", &["LinkedIn"]).unwrap()
    ///     .build();
    /// assert_eq!(text, "timeline\n    2002 : LinkedIn");
    /// ```
    pub fn add_period_with_events(
        mut self,
        label: &str,
        events: &[&str],
    ) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "label", label)?;
        guard::require_non_empty(self.mode(), "events", events)?;
        for event in events {
            guard::require_label(self.mode(), "event", event)?;
        }
        self.push(TimelineItem::Period {
            label: label.to_owned(),
            events: events.iter().map(|event| (*event).to_owned()).collect(),
        });
        Ok(self)
    }
}
