//! Packet layout diagrams.
//!
//! Fields are declared either by an absolute end bit-index or by a relative
//! bit width, freely interleaved. Emission is a left-to-right fold over
//! declaration order with a single running cursor starting at `-1`: an
//! end-field renders `{cursor+1}-{end}: "{desc}"` and moves the cursor to
//! `end`; a bits-field renders `+{width}: "{desc}"` and advances the cursor
//! by `width`. The fold never sorts and never second-guesses the cursor, so
//! unsafe-mode negative ends/widths produce descending or negative ranges
//! verbatim.

use mermatic_core::{BuildError, guard};

use crate::diagram::{Diagram, DiagramKind};

/// One field declaration in a packet diagram.
#[derive(Debug, Clone)]
pub enum PacketItem {
    /// Field closed by an absolute end bit-index.
    End {
        /// Absolute bit-index of the field's last bit.
        end: i32,
        /// Field label; rendered inside quotes, empty when absent.
        description: Option<String>,
    },
    /// Field sized by a relative bit width.
    Bits {
        /// Width in bits, added to the running cursor.
        width: i32,
        /// Field label; rendered inside quotes, empty when absent.
        description: Option<String>,
    },
}

/// Line-format strategy for packet diagrams.
#[derive(Debug, Default)]
pub struct Packet;

/// A packet diagram builder; see [`crate::packet`] and [`crate::unchecked::packet`].
pub type PacketDiagram = Diagram<Packet>;

impl DiagramKind for Packet {
    type Item = PacketItem;

    const NAME: &'static str = "packet";

    fn keyword(&self) -> String {
        "packet".to_owned()
    }

    fn render(&self, items: &[Self::Item], lines: &mut Vec<String>) {
        let mut cursor: i64 = -1;
        for item in items {
            match item {
                PacketItem::End { end, description } => {
                    let desc = description.as_deref().unwrap_or_default();
                    lines.push(format!("{}-{}: \"{}\"", cursor + 1, end, desc));
                    cursor = i64::from(*end);
                }
                PacketItem::Bits { width, description } => {
                    let desc = description.as_deref().unwrap_or_default();
                    lines.push(format!("+{}: \"{}\"", width, desc));
                    cursor += i64::from(*width);
                }
            }
        }
    }
}

impl PacketDiagram {
    /// Appends a field closed by an absolute end bit-index.
    ///
    /// # Errors
    ///
    /// In safe mode, a negative `end` raises
    /// [`BuildError::StrictlyNegative`] and a blank description raises
    /// [`BuildError::WhiteSpace`].
    ///
    /// # Examples
    ///
    /// ```
    /// let text = mermatic::packet(None, None)
    ///     .add_field_with_end(10, "foo").unwrap()
    ///     .add_field_with_bits(5, "bar").unwrap()
    ///     .add_field_with_end(25, "baz").unwrap()
    ///     .build();
    /// assert_eq!(text, "packet\n0-10: \"foo\"\n+5: \"bar\"\n16-25: \"baz\"");
    /// ```
    pub fn add_field_with_end<'a>(
        mut self,
        end: i32,
        description: impl Into<Option<&'a str>>,
    ) -> Result<Self, BuildError> {
        guard::require_non_negative(self.mode(), "end", end.into())?;
        let description = checked_description(self.mode(), description.into())?;
        self.push(PacketItem::End { end, description });
        Ok(self)
    }

    /// Appends a field sized by a relative bit width.
    ///
    /// # Errors
    ///
    /// In safe mode, a negative `width` raises
    /// [`BuildError::StrictlyNegative`] and a blank description raises
    /// [`BuildError::WhiteSpace`].
    pub fn add_field_with_bits<'a>(
        mut self,
        width: i32,
        description: impl Into<Option<&'a str>>,
    ) -> Result<Self, BuildError> {
        guard::require_non_negative(self.mode(), "width", width.into())?;
        let description = checked_description(self.mode(), description.into())?;
        self.push(PacketItem::Bits { width, description });
        Ok(self)
    }
}

fn checked_description(
    mode: mermatic_core::Mode,
    description: Option<&str>,
) -> Result<Option<String>, BuildError> {
    if let Some(description) = description {
        guard::require_label(mode, "description", description)?;
    }
    Ok(description.map(str::to_owned))
}
