//! Checksummed snapshot codec for tile position and vertical velocity.
//!
//! A [`Snapshot`] packs five fields into exactly 3 bytes:
//!
//! - `x_tile` (6 bits), `x_sub` (4 bits), `y_tile` (5 bits)
//! - `velocity_y` (5 bits, two's complement)
//! - a 4-bit XOR checksum over the 20 data bits
//!
//! [`PlayerState`] is a separate 16-bit word for power-up, facing, lives,
//! level and enemy proximity. It has no checksum.
//!
//! # Design Principles
//!
//! - **Explicit layout** - Bytes are addressed by shift and mask, never by memory overlay.
//! - **Saturating setters** - Out-of-range inputs clamp; they are never rejected.
//! - **Verbatim decode** - Deserialization never fails; integrity is checked on demand.
//! - **No I/O** - Callers own the transport.
//!
//! # Example
//!
//! ```
//! use codec::Snapshot;
//!
//! let mut snapshot = Snapshot::new();
//! snapshot.set_position(10, 5, 8);
//! snapshot.set_velocity(-5);
//!
//! let bytes = snapshot.serialize();
//! assert_eq!(bytes, [0x4A, 0xA1, 0x8D]);
//!
//! let decoded = Snapshot::deserialize(bytes);
//! assert!(decoded.is_valid());
//! assert_eq!(decoded.velocity_y(), -5);
//! ```

mod error;
mod layout;
mod snapshot;
mod state;

pub use error::{CodecError, CodecResult};
pub use layout::{
    CHECKSUM_BITS, SNAPSHOT_SIZE, VELOCITY_Y_BITS, VELOCITY_Y_MAX, VELOCITY_Y_MIN, X_SUB_BITS,
    X_SUB_MAX, X_TILE_BITS, X_TILE_MAX, Y_TILE_BITS, Y_TILE_MAX,
};
pub use snapshot::{Snapshot, SnapshotFields};
pub use state::{Direction, Enemy, PlayerState, Power, LEVEL_BITS, LIVES_BITS, STATE_SIZE};
