//! Error types for codec operations.

use std::fmt;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised by the slice-based encode/decode entry points.
///
/// The fixed-array API never fails: out-of-range field inputs are clamped and
/// checksum mismatches are reported through `is_valid`, not through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodecError {
    /// Output buffer is too small for the encoded record.
    OutputTooSmall { needed: usize, available: usize },

    /// Input buffer does not have the exact record length.
    BufferLength { expected: usize, actual: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputTooSmall { needed, available } => {
                write!(f, "output too small: need {needed} bytes, have {available}")
            }
            Self::BufferLength { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {expected} bytes, got {actual}"
                )
            }
        }
    }
}

impl std::error::Error for CodecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_output_too_small() {
        let err = CodecError::OutputTooSmall {
            needed: 3,
            available: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("output too small"));
        assert!(msg.contains("need 3"));
    }

    #[test]
    fn display_buffer_length() {
        let err = CodecError::BufferLength {
            expected: 3,
            actual: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("expected 3"));
        assert!(msg.contains("got 5"));
    }
}
