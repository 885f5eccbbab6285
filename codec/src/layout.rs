//! Bit layout of the 3-byte snapshot record.
//!
//! ```text
//! byte0: [x_sub.lo:2 | x_tile:6]          bits 7..6 | 5..0
//! byte1: [vel.lo:1 | y_tile:5 | x_sub.hi:2] bits 7 | 6..2 | 1..0
//! byte2: [checksum:4 | vel.hi:4]           bits 7..4 | 3..0
//! ```

use bitfield::{signed_max, signed_min, unsigned_max, ByteField};

/// Encoded snapshot size in bytes.
pub const SNAPSHOT_SIZE: usize = 3;

/// Width of the horizontal tile index.
pub const X_TILE_BITS: u8 = 6;
/// Width of the sub-tile precision.
pub const X_SUB_BITS: u8 = 4;
/// Width of the vertical tile index.
pub const Y_TILE_BITS: u8 = 5;
/// Width of the signed vertical velocity.
pub const VELOCITY_Y_BITS: u8 = 5;
/// Width of the embedded checksum.
pub const CHECKSUM_BITS: u8 = 4;

pub const X_TILE_MAX: u8 = unsigned_max(X_TILE_BITS);
pub const X_SUB_MAX: u8 = unsigned_max(X_SUB_BITS);
pub const Y_TILE_MAX: u8 = unsigned_max(Y_TILE_BITS);
pub const VELOCITY_Y_MIN: i8 = signed_min(VELOCITY_Y_BITS);
pub const VELOCITY_Y_MAX: i8 = signed_max(VELOCITY_Y_BITS);

pub(crate) const X_TILE: ByteField = ByteField::new(0, X_TILE_BITS);
pub(crate) const X_SUB_LO: ByteField = ByteField::new(6, 2);
pub(crate) const X_SUB_HI: ByteField = ByteField::new(0, 2);
pub(crate) const Y_TILE: ByteField = ByteField::new(2, Y_TILE_BITS);
pub(crate) const VELOCITY_LO: ByteField = ByteField::new(7, 1);
pub(crate) const VELOCITY_HI: ByteField = ByteField::new(0, 4);
pub(crate) const CHECKSUM: ByteField = ByteField::new(4, CHECKSUM_BITS);

/// Either nibble of a byte.
pub(crate) const LOW_NIBBLE: ByteField = ByteField::new(0, 4);
pub(crate) const HIGH_NIBBLE: ByteField = ByteField::new(4, 4);
