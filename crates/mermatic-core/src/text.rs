//! Text primitives shared by the diagram emitters.
//!
//! Indentation units, numeric formatting, bracket-list label quoting, and
//! the section indentation state machine used by the hierarchical diagram
//! kinds (timeline, journey, gantt).

use std::borrow::Cow;

/// One indentation unit of the output grammar.
pub const INDENT: &str = "    ";

const DOUBLE_INDENT: &str = "        ";

/// Formats a number the way the output grammar expects.
///
/// Integral values render without a fractional part (`10`, not `10.0`);
/// everything else uses the shortest round-trip form.
pub fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Quotes a label destined for a bracketed list when it would break the
/// list syntax (embedded commas, brackets, or whitespace).
pub fn quote_label(label: &str) -> Cow<'_, str> {
    let needs_quoting = label
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, ',' | '[' | ']'));
    if needs_quoting {
        Cow::Owned(format!("\"{label}\""))
    } else {
        Cow::Borrowed(label)
    }
}

/// Indentation state machine for section-structured diagrams.
///
/// Two states: before the first section, leaves sit at one indent unit;
/// after a section header (itself at one unit), leaves sit at two units.
/// The indentation of any line is a pure function of the current state.
#[derive(Debug, Default)]
pub struct SectionIndent {
    in_section: bool,
}

impl SectionIndent {
    /// Starts in the no-section state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters (or re-enters) a section; returns the header indentation.
    pub fn section(&mut self) -> &'static str {
        self.in_section = true;
        INDENT
    }

    /// Returns the indentation for a leaf line in the current state.
    pub fn leaf(&self) -> &'static str {
        if self.in_section { DOUBLE_INDENT } else { INDENT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_number_trims_integral_values() {
        assert_eq!(fmt_number(10.0), "10");
        assert_eq!(fmt_number(0.0), "0");
        assert_eq!(fmt_number(-25.0), "-25");
        assert_eq!(fmt_number(10.5), "10.5");
        assert_eq!(fmt_number(-0.25), "-0.25");
    }

    #[test]
    fn test_quote_label() {
        assert_eq!(quote_label("jan"), "jan");
        assert_eq!(quote_label("rev-2"), "rev-2");
        assert_eq!(quote_label("first quarter"), "\"first quarter\"");
        assert_eq!(quote_label("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_section_indent_states() {
        let mut indent = SectionIndent::new();
        assert_eq!(indent.leaf(), INDENT);
        assert_eq!(indent.section(), INDENT);
        assert_eq!(indent.leaf(), DOUBLE_INDENT);
        assert_eq!(indent.section(), INDENT);
        assert_eq!(indent.leaf(), DOUBLE_INDENT);
    }
}
