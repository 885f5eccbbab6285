//! Byte-local field descriptors.

use crate::clamp::unsigned_max;
use crate::error::{BitError, BitResult};

/// Maximum width of a byte-local field.
pub const MAX_FIELD_BITS: u8 = 8;

/// A contiguous run of bits inside a single byte.
///
/// Bit 0 is the least significant bit of the byte. A field with `shift = 2`
/// and `width = 5` occupies bits 2 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteField {
    shift: u8,
    width: u8,
}

impl ByteField {
    /// Creates a field descriptor, panicking if it does not fit in a byte.
    ///
    /// Intended for `const` layout tables, where the panic becomes a compile
    /// error. Use [`try_new`](Self::try_new) for runtime-provided layouts.
    #[must_use]
    pub const fn new(shift: u8, width: u8) -> Self {
        match Self::try_new(shift, width) {
            Ok(field) => field,
            Err(_) => panic!("byte field must fit inside a single byte"),
        }
    }

    /// Creates a field descriptor, validating width and placement.
    pub const fn try_new(shift: u8, width: u8) -> BitResult<Self> {
        if width == 0 || width > MAX_FIELD_BITS {
            return Err(BitError::InvalidWidth {
                bits: width,
                max_bits: MAX_FIELD_BITS,
            });
        }
        if shift >= MAX_FIELD_BITS || width > MAX_FIELD_BITS - shift {
            return Err(BitError::FieldOverflow { shift, bits: width });
        }
        Ok(Self { shift, width })
    }

    /// Position of the field's least significant bit.
    #[must_use]
    pub const fn shift(self) -> u8 {
        self.shift
    }

    /// Width of the field in bits.
    #[must_use]
    pub const fn width(self) -> u8 {
        self.width
    }

    /// Largest unsigned value the field can hold.
    #[must_use]
    pub const fn max_value(self) -> u8 {
        unsigned_max(self.width)
    }

    /// In-place mask of the field within its byte.
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.max_value() << self.shift
    }

    /// Returns `byte` with the field replaced by `value`.
    ///
    /// Bits of `value` above the field width are dropped; bits of `byte`
    /// outside the field are untouched.
    #[must_use]
    pub const fn insert(self, byte: u8, value: u8) -> u8 {
        (byte & !self.mask()) | ((value & self.max_value()) << self.shift)
    }

    /// Reads the field's value out of `byte`.
    #[must_use]
    pub const fn extract(self, byte: u8) -> u8 {
        (byte >> self.shift) & self.max_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_zero_width() {
        assert_eq!(
            ByteField::try_new(0, 0),
            Err(BitError::InvalidWidth {
                bits: 0,
                max_bits: 8
            })
        );
    }

    #[test]
    fn try_new_rejects_wide_field() {
        assert!(matches!(
            ByteField::try_new(0, 9),
            Err(BitError::InvalidWidth { bits: 9, .. })
        ));
    }

    #[test]
    fn try_new_rejects_overflowing_placement() {
        assert_eq!(
            ByteField::try_new(6, 4),
            Err(BitError::FieldOverflow { shift: 6, bits: 4 })
        );
        assert!(matches!(
            ByteField::try_new(8, 1),
            Err(BitError::FieldOverflow { .. })
        ));
    }

    #[test]
    fn full_byte_field() {
        let field = ByteField::new(0, 8);
        assert_eq!(field.mask(), 0xFF);
        assert_eq!(field.insert(0x12, 0xAB), 0xAB);
        assert_eq!(field.extract(0xAB), 0xAB);
    }

    #[test]
    fn mask_positions() {
        assert_eq!(ByteField::new(0, 6).mask(), 0b0011_1111);
        assert_eq!(ByteField::new(6, 2).mask(), 0b1100_0000);
        assert_eq!(ByteField::new(2, 5).mask(), 0b0111_1100);
        assert_eq!(ByteField::new(7, 1).mask(), 0b1000_0000);
        assert_eq!(ByteField::new(4, 4).mask(), 0b1111_0000);
    }

    #[test]
    fn insert_preserves_neighbouring_bits() {
        let field = ByteField::new(2, 5);
        let byte = field.insert(0b1000_0011, 0b0_1000);
        assert_eq!(byte, 0b1010_0011);
        assert_eq!(field.extract(byte), 0b0_1000);
    }

    #[test]
    fn insert_truncates_wide_values() {
        let field = ByteField::new(6, 2);
        assert_eq!(field.insert(0, 0b101), 0b0100_0000);
    }

    #[test]
    fn insert_overwrites_previous_value() {
        let field = ByteField::new(0, 6);
        let byte = field.insert(0xFF, 10);
        assert_eq!(byte, 0b1100_1010);
        assert_eq!(field.extract(byte), 10);
    }

    #[test]
    fn const_layout_table() {
        const LOW: ByteField = ByteField::new(7, 1);
        const HIGH: ByteField = ByteField::new(0, 4);
        assert_eq!(LOW.width() + HIGH.width(), 5);
        assert_eq!(LOW.shift(), 7);
    }
}
