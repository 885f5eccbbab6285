//! Error types for bitfield operations.

use std::fmt;

/// Result type for bitfield operations.
pub type BitResult<T> = Result<T, BitError>;

/// Errors that can occur while describing a sub-byte field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitError {
    /// Field width is zero or wider than a byte.
    InvalidWidth {
        /// The invalid width provided.
        bits: u8,
        /// Maximum allowed width.
        max_bits: u8,
    },

    /// Field does not fit inside a single byte at the given shift.
    FieldOverflow {
        /// Position of the field's least significant bit.
        shift: u8,
        /// Width of the field in bits.
        bits: u8,
    },
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWidth { bits, max_bits } => {
                write!(
                    f,
                    "invalid field width {bits}, expected 1 to {max_bits} bits"
                )
            }
            Self::FieldOverflow { shift, bits } => {
                write!(
                    f,
                    "{bits}-bit field at shift {shift} overflows a single byte"
                )
            }
        }
    }
}

impl std::error::Error for BitError {}
