//! Saturating range helpers for narrow integer fields.
//!
//! Every helper accepts any `bits` value: widths of 8 or more behave like the
//! full byte, and a width of 0 collapses the range to `0`.

/// Largest unsigned value representable in `bits` bits.
#[must_use]
pub const fn unsigned_max(bits: u8) -> u8 {
    if bits >= 8 {
        u8::MAX
    } else {
        (1u8 << bits) - 1
    }
}

/// Largest value representable in a `bits`-wide two's-complement field.
#[must_use]
pub const fn signed_max(bits: u8) -> i8 {
    if bits == 0 {
        0
    } else if bits >= 8 {
        i8::MAX
    } else {
        (1i8 << (bits - 1)) - 1
    }
}

/// Smallest value representable in a `bits`-wide two's-complement field.
#[must_use]
pub const fn signed_min(bits: u8) -> i8 {
    if bits == 0 {
        0
    } else if bits >= 8 {
        i8::MIN
    } else {
        -(1i8 << (bits - 1))
    }
}

/// Saturates `value` to the unsigned range of a `bits`-wide field.
#[must_use]
pub const fn clamp_unsigned(value: u8, bits: u8) -> u8 {
    let max = unsigned_max(bits);
    if value > max {
        max
    } else {
        value
    }
}

/// Saturates `value` to the two's-complement range of a `bits`-wide field.
#[must_use]
pub const fn clamp_signed(value: i8, bits: u8) -> i8 {
    let max = signed_max(bits);
    let min = signed_min(bits);
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// Reinterprets an in-range signed value as its `bits`-wide bit pattern.
///
/// Callers clamp first; out-of-range inputs lose their high bits.
#[must_use]
pub const fn to_twos_complement(value: i8, bits: u8) -> u8 {
    (value as u8) & unsigned_max(bits)
}

/// Sign-extends the low `bits` bits of `raw` into an `i8`.
#[must_use]
pub const fn sign_extend(raw: u8, bits: u8) -> i8 {
    if bits == 0 {
        return 0;
    }
    if bits >= 8 {
        return raw as i8;
    }
    let shift = 8 - bits;
    // Left-align the sign bit, then use an arithmetic shift to smear it back.
    ((raw << shift) as i8) >> shift
}
