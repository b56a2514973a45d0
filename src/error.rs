//! Error types for the Karnaugh minimizer
//!
//! This module provides error types that can be distinguished programmatically,
//! so callers never have to compare result values against sentinels.

use std::fmt;

/// The main error type for the Karnaugh minimizer
///
/// Covers the two failure modes of the library: rejecting a malformed
/// textual expression, and a minimized function failing the full-domain
/// re-check. An empty (constant-0) function is a legitimate `Ok` value and
/// is never conflated with either error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KarnaughError {
    /// A textual sum-of-products expression could not be parsed
    ///
    /// Expressions may only contain the letters `A`-`Z`, spaces, `+`,
    /// and the negation markers `/` and `.`. Structural problems (an empty
    /// monomial, a dangling negation marker) are reported here too.
    MalformedExpression {
        /// What was wrong with the input
        message: String,
        /// The original input string that failed to parse
        input: String,
        /// Byte offset in the input where the error occurred, when known
        position: Option<usize>,
    },

    /// The minimized function disagrees with the truth table
    ///
    /// Returned by the validating entry points when re-evaluation over the
    /// full domain (don't-cares excluded) finds a mismatch.
    ValidationFailed {
        /// The first index where the minimized function and the table disagree
        index: u64,
    },
}

impl fmt::Display for KarnaughError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KarnaughError::MalformedExpression {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse expression at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(
                        f,
                        "Failed to parse expression: {}. Input: {:?}",
                        message, input
                    )
                }
            }
            KarnaughError::ValidationFailed { index } => write!(
                f,
                "Minimized function disagrees with the truth table at index {}",
                index
            ),
        }
    }
}

impl std::error::Error for KarnaughError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_expression_with_position() {
        let err = KarnaughError::MalformedExpression {
            message: "invalid character '*'".to_string(),
            input: "A*B".to_string(),
            position: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("position 1"));
        assert!(msg.contains("invalid character"));
        assert!(msg.contains("A*B"));
    }

    #[test]
    fn test_malformed_expression_without_position() {
        let err = KarnaughError::MalformedExpression {
            message: "unexpected end of input".to_string(),
            input: "A +".to_string(),
            position: None,
        };
        let msg = err.to_string();
        assert!(!msg.contains("position"));
        assert!(msg.contains("unexpected end of input"));
    }

    #[test]
    fn test_validation_failed_display() {
        let err = KarnaughError::ValidationFailed { index: 5 };
        let msg = err.to_string();
        assert!(msg.contains("index 5"));
    }
}
