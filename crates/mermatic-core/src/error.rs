//! Error types for diagram construction.
//!
//! This module provides the main error type [`BuildError`], a closed set of
//! reason codes raised by the guard predicates in [`crate::guard`]. Errors
//! are only ever raised in [`Mode::Safe`](crate::mode::Mode::Safe); unsafe
//! builders never fail.

use thiserror::Error;

/// The main error type for diagram construction.
///
/// Every variant identifies the offending parameter so callers can tell
/// which argument of a chained call tripped the guard. A failed call is
/// fatal to its chain: the builder is consumed by the failing operation and
/// must not be reused.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    /// A label-shaped string argument was empty or whitespace-only.
    #[error("parameter `{parameter}` must not be blank")]
    WhiteSpace {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// A numeric argument constrained to be non-negative was negative.
    #[error("parameter `{parameter}` must not be negative (got {value})")]
    StrictlyNegative {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A collection argument required to be non-empty was empty.
    #[error("parameter `{parameter}` must not be empty")]
    EmptyCollection {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// An internal invariant was violated.
    ///
    /// Reserved for programming errors such as an unrecognized item variant
    /// reaching an emitter; user input can never produce this variant.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_parameter() {
        let err = BuildError::WhiteSpace { parameter: "name" };
        assert_eq!(err.to_string(), "parameter `name` must not be blank");

        let err = BuildError::StrictlyNegative {
            parameter: "width",
            value: -3.0,
        };
        assert_eq!(
            err.to_string(),
            "parameter `width` must not be negative (got -3)"
        );

        let err = BuildError::EmptyCollection { parameter: "values" };
        assert_eq!(err.to_string(), "parameter `values` must not be empty");
    }
}
