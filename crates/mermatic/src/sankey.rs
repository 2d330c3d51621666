//! Sankey flow diagrams.
//!
//! Flows render as `{source},{target},{value}` lines in declaration order;
//! blank separator lines may be interleaved verbatim between flows.

use mermatic_core::{BuildError, guard, text};

use crate::diagram::{Diagram, DiagramKind};

/// One appended construct in a sankey diagram.
#[derive(Debug, Clone)]
pub enum SankeyItem {
    /// A weighted flow from `source` to `target`.
    Flow {
        /// Source node label.
        source: String,
        /// Target node label.
        target: String,
        /// Flow quantity.
        value: f64,
    },
    /// A verbatim blank line between flows.
    EmptyLine,
}

/// Line-format strategy for sankey diagrams.
#[derive(Debug, Default)]
pub struct Sankey;

/// A sankey diagram builder; see [`crate::sankey`] and [`crate::unchecked::sankey`].
pub type SankeyDiagram = Diagram<Sankey>;

impl DiagramKind for Sankey {
    type Item = SankeyItem;

    const NAME: &'static str = "sankey";

    fn keyword(&self) -> String {
        "sankey".to_owned()
    }

    fn render(&self, items: &[Self::Item], lines: &mut Vec<String>) {
        for item in items {
            match item {
                SankeyItem::Flow {
                    source,
                    target,
                    value,
                } => {
                    lines.push(format!("{},{},{}", source, target, text::fmt_number(*value)));
                }
                SankeyItem::EmptyLine => lines.push(String::new()),
            }
        }
    }
}

impl SankeyDiagram {
    /// Appends a weighted flow between two nodes.
    ///
    /// # Errors
    ///
    /// In safe mode, blank labels raise [`BuildError::WhiteSpace`] and a
    /// negative value raises [`BuildError::StrictlyNegative`].
    ///
    /// # Examples
    ///
    /// ```
    /// let text = mermatic::sankey(None, None)
    ///     .add_flow("A", "B", 10.0).unwrap()
    ///     .build();
    /// assert_eq!(text, "sankey\nA,B,10");
    /// ```
    pub fn add_flow(mut self, source: &str, target: &str, value: f64) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "source", source)?;
        guard::require_label(self.mode(), "target", target)?;
        guard::require_non_negative(self.mode(), "value", value)?;
        self.push(SankeyItem::Flow {
            source: source.to_owned(),
            target: target.to_owned(),
            value,
        });
        Ok(self)
    }

    /// Appends a verbatim blank line between flows.
    pub fn add_empty_line(mut self) -> Self {
        self.push(SankeyItem::EmptyLine);
        self
    }
}
