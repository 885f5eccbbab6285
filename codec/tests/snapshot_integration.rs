use codec::{CodecError, PlayerState, Power, Snapshot, SnapshotFields, SNAPSHOT_SIZE, STATE_SIZE};

fn snapshot(x_tile: u8, x_sub: u8, y_tile: u8, velocity_y: i8) -> Snapshot {
    let mut snapshot = Snapshot::new();
    snapshot.set_position(x_tile, x_sub, y_tile);
    snapshot.set_velocity(velocity_y);
    snapshot
}

#[test]
fn reference_flow_clear_set_serialize_deserialize() {
    let mut snap1 = Snapshot::new();
    snap1.clear();
    snap1.set_position(10, 5, 8);
    snap1.set_velocity(-5);
    assert_eq!(snap1.as_bytes(), &[0x4A, 0xA1, 0x0D]);
    assert_eq!(snap1.compute_checksum(), 0x8);

    let buffer = snap1.serialize();
    assert_eq!(buffer, [0x4A, 0xA1, 0x8D]);

    let snap2 = Snapshot::deserialize(buffer);
    assert_eq!(snap2.as_bytes(), &buffer);

    // The in-memory original never had its checksum slot filled.
    assert!(!snap1.is_valid());
    assert!(snap2.is_valid());
}

#[test]
fn every_single_bit_flip_is_detected() {
    let valid = snapshot(41, 11, 19, 6).serialize();
    assert!(Snapshot::deserialize(valid).is_valid());

    for byte in 0..SNAPSHOT_SIZE {
        for bit in 0..8 {
            let mut corrupted = valid;
            corrupted[byte] ^= 1 << bit;
            assert!(
                !Snapshot::deserialize(corrupted).is_valid(),
                "flip of byte {byte} bit {bit} went undetected"
            );
        }
    }
}

#[test]
fn cancelling_double_flip_is_a_known_blind_spot() {
    let valid = snapshot(0, 0, 0, 0).serialize();
    let mut corrupted = valid;
    // Same bit position in two data nibbles cancels within the XOR fold.
    corrupted[0] ^= 0b0000_0001;
    corrupted[0] ^= 0b0001_0000;

    let decoded = Snapshot::deserialize(corrupted);
    assert!(decoded.is_valid());
    assert_ne!(decoded.as_bytes(), &valid);
}

#[test]
fn save_buffer_of_many_snapshots() {
    let frames: Vec<Snapshot> = (0u8..20)
        .map(|i| snapshot(i * 3, i % 16, i, (i as i8) - 10))
        .collect();

    let mut save = vec![0u8; frames.len() * SNAPSHOT_SIZE];
    for (frame, chunk) in frames.iter().zip(save.chunks_mut(SNAPSHOT_SIZE)) {
        let written = frame.serialize_into(chunk).unwrap();
        assert_eq!(written, SNAPSHOT_SIZE);
    }

    let restored: Vec<Snapshot> = save
        .chunks(SNAPSHOT_SIZE)
        .map(|chunk| Snapshot::deserialize_from(chunk).unwrap())
        .collect();

    for (original, restored) in frames.iter().zip(&restored) {
        assert!(restored.is_valid());
        assert_eq!(restored.fields(), original.fields());
    }
}

#[test]
fn truncated_save_buffer_reports_length() {
    let bytes = snapshot(1, 2, 3, 4).serialize();
    let err = Snapshot::deserialize_from(&bytes[..2]).unwrap_err();
    assert_eq!(
        err,
        CodecError::BufferLength {
            expected: SNAPSHOT_SIZE,
            actual: 2
        }
    );
}

#[test]
fn corrupted_snapshot_still_decodes_fields() {
    let mut bytes = snapshot(10, 5, 8, -5).serialize();
    bytes[0] ^= 0b0000_0100;

    let decoded = Snapshot::deserialize(bytes);
    assert!(!decoded.is_valid());
    assert_eq!(
        decoded.fields(),
        SnapshotFields {
            x_tile: 14,
            x_sub: 5,
            y_tile: 8,
            velocity_y: -5,
        }
    );
}

#[test]
fn player_state_alongside_snapshot() {
    let mut state = PlayerState::new();
    state.power = Power::Fire;
    state.set_lives(5);
    state.set_level(9);

    let mut record = [0u8; STATE_SIZE + SNAPSHOT_SIZE];
    record[..STATE_SIZE].copy_from_slice(&state.to_bytes());
    snapshot(20, 7, 12, 3)
        .serialize_into(&mut record[STATE_SIZE..])
        .unwrap();

    let state_bytes = [record[0], record[1]];
    let restored_state = PlayerState::from_bytes(state_bytes);
    let restored_snapshot = Snapshot::deserialize_from(&record[STATE_SIZE..]).unwrap();

    assert_eq!(restored_state, state);
    assert!(restored_snapshot.is_valid());
    assert_eq!(restored_snapshot.x_tile(), 20);
}
