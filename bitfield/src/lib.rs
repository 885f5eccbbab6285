//! Sub-byte field packing primitives for the tilesnap codec.
//!
//! This crate provides [`ByteField`] for masked insert/extract of bit ranges
//! inside a byte, and saturating helpers for narrow signed and unsigned values.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Layouts are explicit shift/mask arithmetic, never memory overlays.
//! - **Saturating inputs** - Range helpers clamp instead of wrapping.
//! - **No domain knowledge** - This crate knows nothing about snapshots or game state.
//! - **Portable signed fields** - Two's-complement encode and sign extension are explicit.
//!
//! # Example
//!
//! ```
//! use bitfield::{clamp_signed, sign_extend, to_twos_complement, ByteField};
//!
//! const VELOCITY: ByteField = ByteField::new(3, 5);
//!
//! let encoded = to_twos_complement(clamp_signed(-40, 5), 5);
//! let byte = VELOCITY.insert(0b0000_0101, encoded);
//!
//! assert_eq!(byte & 0b111, 0b101);
//! assert_eq!(sign_extend(VELOCITY.extract(byte), 5), -16);
//! ```

mod clamp;
mod error;
mod field;

pub use clamp::{
    clamp_signed, clamp_unsigned, sign_extend, signed_max, signed_min, to_twos_complement,
    unsigned_max,
};
pub use error::{BitError, BitResult};
pub use field::{ByteField, MAX_FIELD_BITS};
