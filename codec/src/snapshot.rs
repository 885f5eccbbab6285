//! The checksummed 3-byte position/velocity snapshot.

use bitfield::{clamp_signed, clamp_unsigned, sign_extend, to_twos_complement};

use crate::error::{CodecError, CodecResult};
use crate::layout::{
    CHECKSUM, HIGH_NIBBLE, LOW_NIBBLE, SNAPSHOT_SIZE, VELOCITY_HI, VELOCITY_LO, VELOCITY_Y_BITS,
    X_SUB_BITS, X_SUB_HI, X_SUB_LO, X_TILE, X_TILE_BITS, Y_TILE, Y_TILE_BITS,
};

/// A packed snapshot of tile position and vertical velocity.
///
/// The value owns its 3 raw bytes; every field is read and written through
/// explicit shift/mask arithmetic, so the in-memory bytes are exactly the
/// wire bytes. The default value is cleared (all zero) and valid.
///
/// Setters saturate out-of-range inputs to the nearest representable value
/// rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Snapshot {
    raw: [u8; SNAPSHOT_SIZE],
}

/// Decoded field values of a [`Snapshot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapshotFields {
    pub x_tile: u8,
    pub x_sub: u8,
    pub y_tile: u8,
    pub velocity_y: i8,
}

impl Snapshot {
    /// Creates a cleared snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: [0; SNAPSHOT_SIZE],
        }
    }

    /// Builds a snapshot from field values, clamping each one.
    ///
    /// The checksum slot is left at zero; use [`serialize`](Self::serialize)
    /// to obtain checksummed bytes.
    #[must_use]
    pub fn from_fields(fields: SnapshotFields) -> Self {
        let mut snapshot = Self::new();
        snapshot.set_position(fields.x_tile, fields.x_sub, fields.y_tile);
        snapshot.set_velocity(fields.velocity_y);
        snapshot
    }

    /// Zeroes all bytes, including the checksum slot.
    pub fn clear(&mut self) {
        self.raw = [0; SNAPSHOT_SIZE];
    }

    /// Writes the position fields, leaving velocity and checksum bits intact.
    ///
    /// Inputs saturate at 63, 15 and 31 respectively.
    pub fn set_position(&mut self, x_tile: u8, x_sub: u8, y_tile: u8) {
        let x_tile = clamp_unsigned(x_tile, X_TILE_BITS);
        let x_sub = clamp_unsigned(x_sub, X_SUB_BITS);
        let y_tile = clamp_unsigned(y_tile, Y_TILE_BITS);

        let [byte0, byte1, _] = &mut self.raw;
        *byte0 = X_TILE.insert(*byte0, x_tile);
        *byte0 = X_SUB_LO.insert(*byte0, x_sub);
        *byte1 = X_SUB_HI.insert(*byte1, x_sub >> X_SUB_LO.width());
        *byte1 = Y_TILE.insert(*byte1, y_tile);
    }

    /// Writes the signed vertical velocity, saturating to `-16..=15`.
    ///
    /// Position bits and the checksum slot are left intact.
    pub fn set_velocity(&mut self, velocity_y: i8) {
        let velocity_y = clamp_signed(velocity_y, VELOCITY_Y_BITS);
        let encoded = to_twos_complement(velocity_y, VELOCITY_Y_BITS);

        let [_, byte1, byte2] = &mut self.raw;
        *byte1 = VELOCITY_LO.insert(*byte1, encoded);
        *byte2 = VELOCITY_HI.insert(*byte2, encoded >> VELOCITY_LO.width());
    }

    /// Horizontal tile index.
    #[must_use]
    pub const fn x_tile(&self) -> u8 {
        X_TILE.extract(self.raw[0])
    }

    /// Sub-tile precision, reassembled from its two halves.
    #[must_use]
    pub const fn x_sub(&self) -> u8 {
        X_SUB_LO.extract(self.raw[0]) | (X_SUB_HI.extract(self.raw[1]) << X_SUB_LO.width())
    }

    /// Vertical tile index.
    #[must_use]
    pub const fn y_tile(&self) -> u8 {
        Y_TILE.extract(self.raw[1])
    }

    /// Signed vertical velocity.
    #[must_use]
    pub const fn velocity_y(&self) -> i8 {
        let encoded = VELOCITY_LO.extract(self.raw[1])
            | (VELOCITY_HI.extract(self.raw[2]) << VELOCITY_LO.width());
        sign_extend(encoded, VELOCITY_Y_BITS)
    }

    /// All decoded field values.
    #[must_use]
    pub const fn fields(&self) -> SnapshotFields {
        SnapshotFields {
            x_tile: self.x_tile(),
            x_sub: self.x_sub(),
            y_tile: self.y_tile(),
            velocity_y: self.velocity_y(),
        }
    }

    /// XOR of the five data nibbles (everything except the checksum slot).
    #[must_use]
    pub const fn compute_checksum(&self) -> u8 {
        let [byte0, byte1, byte2] = self.raw;
        LOW_NIBBLE.extract(byte0)
            ^ HIGH_NIBBLE.extract(byte0)
            ^ LOW_NIBBLE.extract(byte1)
            ^ HIGH_NIBBLE.extract(byte1)
            ^ LOW_NIBBLE.extract(byte2)
    }

    /// Checksum currently held in the top nibble of byte 2.
    #[must_use]
    pub const fn stored_checksum(&self) -> u8 {
        CHECKSUM.extract(self.raw[2])
    }

    /// Returns `true` if the stored checksum matches the data bits.
    ///
    /// A 4-bit XOR catches every single-bit flip but misses multi-bit
    /// corruption that cancels within the fold.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.stored_checksum() == self.compute_checksum()
    }

    /// Raw storage bytes, including whatever checksum is currently stored.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SNAPSHOT_SIZE] {
        &self.raw
    }

    /// Encodes the snapshot with a freshly computed checksum.
    ///
    /// Any checksum already held in storage is discarded, so the output
    /// always validates.
    #[must_use]
    pub const fn serialize(&self) -> [u8; SNAPSHOT_SIZE] {
        let [byte0, byte1, byte2] = self.raw;
        [byte0, byte1, CHECKSUM.insert(byte2, self.compute_checksum())]
    }

    /// Copies encoded bytes verbatim, checksum included.
    ///
    /// Never fails; call [`is_valid`](Self::is_valid) to detect corruption.
    #[must_use]
    pub const fn deserialize(bytes: [u8; SNAPSHOT_SIZE]) -> Self {
        Self { raw: bytes }
    }

    /// Encodes into the front of `out`, returning the number of bytes written.
    pub fn serialize_into(&self, out: &mut [u8]) -> CodecResult<usize> {
        let available = out.len();
        let dest = out
            .get_mut(..SNAPSHOT_SIZE)
            .ok_or(CodecError::OutputTooSmall {
                needed: SNAPSHOT_SIZE,
                available,
            })?;
        dest.copy_from_slice(&self.serialize());
        Ok(SNAPSHOT_SIZE)
    }

    /// Decodes from a slice holding exactly one encoded snapshot.
    ///
    /// Only the length is checked; the checksum is not.
    pub fn deserialize_from(bytes: &[u8]) -> CodecResult<Self> {
        let raw: [u8; SNAPSHOT_SIZE] = bytes.try_into().map_err(|_| CodecError::BufferLength {
            expected: SNAPSHOT_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self::deserialize(raw))
    }
}

impl From<[u8; SNAPSHOT_SIZE]> for Snapshot {
    fn from(bytes: [u8; SNAPSHOT_SIZE]) -> Self {
        Self::deserialize(bytes)
    }
}

impl From<SnapshotFields> for Snapshot {
    fn from(fields: SnapshotFields) -> Self {
        Self::from_fields(fields)
    }
}
