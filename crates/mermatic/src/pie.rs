//! Pie charts.
//!
//! Slices render as `    "{label}" : {value}` lines in declaration order.
//! The `showData` keyword suffix makes the renderer print raw values next
//! to the legend.

use mermatic_core::{BuildError, guard, text};

use crate::diagram::{Diagram, DiagramKind};

/// One slice of a pie chart.
#[derive(Debug, Clone)]
pub enum PieItem {
    /// A labelled slice.
    Slice {
        /// Slice label, always rendered quoted.
        label: String,
        /// Slice quantity.
        value: f64,
    },
}

/// Line-format strategy and kind-level state for pie charts.
#[derive(Debug, Default)]
pub struct Pie {
    show_data: bool,
}

/// A pie chart builder; see [`crate::pie`] and [`crate::unchecked::pie`].
pub type PieDiagram = Diagram<Pie>;

impl DiagramKind for Pie {
    type Item = PieItem;

    const NAME: &'static str = "pie";

    fn keyword(&self) -> String {
        if self.show_data {
            "pie showData".to_owned()
        } else {
            "pie".to_owned()
        }
    }

    fn render(&self, items: &[Self::Item], lines: &mut Vec<String>) {
        for item in items {
            match item {
                PieItem::Slice { label, value } => {
                    lines.push(format!(
                        "{}\"{label}\" : {}",
                        text::INDENT,
                        text::fmt_number(*value)
                    ));
                }
            }
        }
    }
}

impl PieDiagram {
    /// Makes the renderer print raw values next to the legend.
    pub fn show_data(mut self) -> Self {
        self.kind_mut().show_data = true;
        self
    }

    /// Appends a slice.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank label raises [`BuildError::WhiteSpace`] and a
    /// negative value raises [`BuildError::StrictlyNegative`].
    ///
    /// # Examples
    ///
    /// ```
    /// let text = mermatic::pie(Some("Pets"), None)
    ///     .add_slice("Dogs", 386.0).unwrap()
    ///     .build();
    /// assert_eq!(text, "---\ntitle: Pets\n---\npie\n    \"Dogs\" : 386");
    /// ```
    pub fn add_slice(mut self, label: &str, value: f64) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "label", label)?;
        guard::require_non_negative(self.mode(), "value", value)?;
        self.push(PieItem::Slice {
            label: label.to_owned(),
            value,
        });
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use mermatic_core::BuildError;

    #[test]
    fn test_empty_pie_renders_keyword_only() {
        assert_eq!(crate::pie(None, None).build(), "pie");
    }

    #[test]
    fn test_show_data_keyword_suffix() {
        assert_eq!(crate::pie(None, None).show_data().build(), "pie showData");
    }

    #[test]
    fn test_slices_in_declaration_order() {
        let text = crate::pie(None, None)
            .add_slice("Dogs", 386.0)
            .unwrap()
            .add_slice("Cats", 85.9)
            .unwrap()
            .build();
        assert_eq!(text, "pie\n    \"Dogs\" : 386\n    \"Cats\" : 85.9");
    }

    #[test]
    fn test_safe_mode_rejects_negative_value() {
        let err = crate::pie(None, None).add_slice("Dogs", -1.0).unwrap_err();
        assert_eq!(
            err,
            BuildError::StrictlyNegative {
                parameter: "value",
                value: -1.0
            }
        );
    }
}
