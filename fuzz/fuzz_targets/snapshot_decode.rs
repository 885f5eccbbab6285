#![no_main]

use codec::{PlayerState, Snapshot, SNAPSHOT_SIZE, STATE_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary lengths must be rejected cleanly, never panic.
    let _ = Snapshot::deserialize_from(data);

    for chunk in data.chunks_exact(SNAPSHOT_SIZE).take(1024) {
        let Ok(snapshot) = Snapshot::deserialize_from(chunk) else {
            continue;
        };
        let bytes = snapshot.serialize();
        let decoded = Snapshot::deserialize(bytes);

        assert!(decoded.is_valid());
        assert_eq!(decoded.fields(), snapshot.fields());
        assert_eq!(bytes[..2], chunk[..2]);
        assert_eq!(bytes[2] & 0x0F, chunk[2] & 0x0F);
        assert_eq!(snapshot.is_valid(), bytes[2] == chunk[2]);
    }

    if let Some(word) = data.get(..STATE_SIZE) {
        let bits = u16::from_le_bytes([word[0], word[1]]);
        assert_eq!(PlayerState::from_bits(bits).to_bits(), bits);
    }
});
