//! Construction modes for diagram builders.

/// Validation mode carried by every builder instance.
///
/// The mode is decided when the builder is constructed and is immutable for
/// the lifetime of the instance. In [`Mode::Safe`] every guard predicate is
/// consulted and malformed arguments raise a typed
/// [`BuildError`](crate::error::BuildError). In [`Mode::Unsafe`] the guards
/// are bypassed entirely: blank labels, negative widths, and empty
/// collections are accepted verbatim and appear as-is in the rendered text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Arguments are validated; violations fail fast with a reason code.
    #[default]
    Safe,
    /// Arguments are accepted verbatim; the renderer sees whatever was given.
    Unsafe,
}

impl Mode {
    /// Returns true when guard predicates are active for this mode.
    pub fn validates(self) -> bool {
        matches!(self, Self::Safe)
    }
}
