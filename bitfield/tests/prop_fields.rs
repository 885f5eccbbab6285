use bitfield::{
    clamp_signed, clamp_unsigned, sign_extend, signed_max, signed_min, to_twos_complement,
    unsigned_max, ByteField,
};
use proptest::prelude::*;

fn field_strategy() -> impl Strategy<Value = ByteField> {
    (1u8..=8)
        .prop_flat_map(|width| (0u8..=8 - width, Just(width)))
        .prop_map(|(shift, width)| ByteField::new(shift, width))
}

proptest! {
    #[test]
    fn prop_insert_only_touches_field(field in field_strategy(), byte: u8, value: u8) {
        let updated = field.insert(byte, value);
        prop_assert_eq!(updated & !field.mask(), byte & !field.mask());
        prop_assert_eq!(field.extract(updated), value & field.max_value());
    }

    #[test]
    fn prop_insert_is_idempotent(field in field_strategy(), byte: u8, value: u8) {
        let once = field.insert(byte, value);
        prop_assert_eq!(field.insert(once, value), once);
    }

    #[test]
    fn prop_clamp_unsigned_in_range(value: u8, bits in 1u8..=8) {
        let clamped = clamp_unsigned(value, bits);
        prop_assert!(clamped <= unsigned_max(bits));
        if value <= unsigned_max(bits) {
            prop_assert_eq!(clamped, value);
        } else {
            prop_assert_eq!(clamped, unsigned_max(bits));
        }
    }

    #[test]
    fn prop_signed_roundtrip(value: i8, bits in 1u8..=8) {
        let clamped = clamp_signed(value, bits);
        prop_assert!(clamped >= signed_min(bits) && clamped <= signed_max(bits));
        let encoded = to_twos_complement(clamped, bits);
        prop_assert!(encoded <= unsigned_max(bits));
        prop_assert_eq!(sign_extend(encoded, bits), clamped);
    }
}
