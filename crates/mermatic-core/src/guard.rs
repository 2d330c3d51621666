//! Guard predicates consulted by builder add-operations.
//!
//! Each guard is a small pure function taking the [`Mode`] explicitly. In
//! [`Mode::Safe`] a violated predicate returns the matching
//! [`BuildError`] reason code; in [`Mode::Unsafe`] every guard is a no-op
//! and the value is accepted verbatim. Guards are total: they never panic
//! and never inspect anything beyond the argument they are given.
//!
//! # Example
//!
//! ```
//! use mermatic_core::{BuildError, Mode};
//! use mermatic_core::guard;
//!
//! assert!(guard::require_label(Mode::Safe, "name", "Todo").is_ok());
//! assert_eq!(
//!     guard::require_label(Mode::Safe, "name", "   "),
//!     Err(BuildError::WhiteSpace { parameter: "name" }),
//! );
//! assert!(guard::require_label(Mode::Unsafe, "name", "   ").is_ok());
//! ```

use crate::error::BuildError;
use crate::mode::Mode;

/// Requires a non-blank label in safe mode.
///
/// # Errors
///
/// Returns [`BuildError::WhiteSpace`] when `value` trims to the empty string
/// and `mode` validates.
pub fn require_label(mode: Mode, parameter: &'static str, value: &str) -> Result<(), BuildError> {
    if mode.validates() && value.trim().is_empty() {
        return Err(BuildError::WhiteSpace { parameter });
    }
    Ok(())
}

/// Requires a non-negative number in safe mode.
///
/// # Errors
///
/// Returns [`BuildError::StrictlyNegative`] when `value < 0` and `mode`
/// validates.
pub fn require_non_negative(
    mode: Mode,
    parameter: &'static str,
    value: f64,
) -> Result<(), BuildError> {
    if mode.validates() && value < 0.0 {
        return Err(BuildError::StrictlyNegative { parameter, value });
    }
    Ok(())
}

/// Requires a non-empty collection in safe mode.
///
/// # Errors
///
/// Returns [`BuildError::EmptyCollection`] when `values` is empty and `mode`
/// validates.
pub fn require_non_empty<T>(
    mode: Mode,
    parameter: &'static str,
    values: &[T],
) -> Result<(), BuildError> {
    if mode.validates() && values.is_empty() {
        return Err(BuildError::EmptyCollection { parameter });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_guard() {
        assert!(require_label(Mode::Safe, "p", "x").is_ok());
        assert!(require_label(Mode::Safe, "p", " x ").is_ok());
        assert_eq!(
            require_label(Mode::Safe, "p", ""),
            Err(BuildError::WhiteSpace { parameter: "p" })
        );
        assert_eq!(
            require_label(Mode::Safe, "p", " \t\n"),
            Err(BuildError::WhiteSpace { parameter: "p" })
        );
    }

    #[test]
    fn test_non_negative_guard() {
        assert!(require_non_negative(Mode::Safe, "p", 0.0).is_ok());
        assert!(require_non_negative(Mode::Safe, "p", 17.5).is_ok());
        assert_eq!(
            require_non_negative(Mode::Safe, "p", -1.0),
            Err(BuildError::StrictlyNegative {
                parameter: "p",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_non_empty_guard() {
        assert!(require_non_empty(Mode::Safe, "p", &[1]).is_ok());
        assert_eq!(
            require_non_empty::<i32>(Mode::Safe, "p", &[]),
            Err(BuildError::EmptyCollection { parameter: "p" })
        );
    }

    #[test]
    fn test_unsafe_mode_bypasses_every_guard() {
        assert!(require_label(Mode::Unsafe, "p", "").is_ok());
        assert!(require_non_negative(Mode::Unsafe, "p", -42.0).is_ok());
        assert!(require_non_empty::<i32>(Mode::Unsafe, "p", &[]).is_ok());
    }
}
