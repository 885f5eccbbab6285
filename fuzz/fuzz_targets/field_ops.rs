#![no_main]

use bitfield::ByteField;
use codec::Snapshot;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut snapshot = Snapshot::new();
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of setter calls.
    while idx + 3 < data.len() && idx < 4096 {
        let op = data[idx] % 4;
        let args = &data[idx + 1..idx + 4];
        idx += 4;

        let before = *snapshot.as_bytes();
        match op {
            0 => {
                snapshot.set_position(args[0], args[1], args[2]);
                assert_eq!(snapshot.as_bytes()[1] & 0x80, before[1] & 0x80);
                assert_eq!(snapshot.as_bytes()[2], before[2]);
            }
            1 => {
                snapshot.set_velocity(args[0] as i8);
                assert_eq!(snapshot.as_bytes()[0], before[0]);
                assert_eq!(snapshot.as_bytes()[1] & 0x7F, before[1] & 0x7F);
                assert_eq!(snapshot.as_bytes()[2] & 0xF0, before[2] & 0xF0);
            }
            2 => {
                if let Ok(field) = ByteField::try_new(args[0] % 9, args[1] % 9) {
                    let byte = field.insert(args[2], args[1]);
                    assert_eq!(byte & !field.mask(), args[2] & !field.mask());
                }
            }
            _ => snapshot.clear(),
        }
        assert!(Snapshot::deserialize(snapshot.serialize()).is_valid());
    }
});
