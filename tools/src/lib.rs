//! Inspection and encoding tools for tilesnap snapshots.
//!
//! This crate backs the `tilesnap-tools` binary:
//!
//! - Parse snapshot bytes from hex text
//! - Explain a snapshot's fields and checksum state
//! - Encode field values and player state into wire bytes
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to see what the codec is doing.

use anyhow::{bail, Context, Result};
use codec::{PlayerState, Snapshot, SnapshotFields, SNAPSHOT_SIZE, STATE_SIZE};
use serde::Serialize;

/// Decoded view of one 3-byte snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub bytes: [u8; SNAPSHOT_SIZE],
    pub fields: SnapshotFields,
    pub stored_checksum: u8,
    pub computed_checksum: u8,
    pub valid: bool,
}

/// Result of encoding field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    /// Field values after clamping.
    pub fields: SnapshotFields,
    pub bytes: [u8; SNAPSHOT_SIZE],
    pub checksum: u8,
}

/// Result of encoding a player state word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateReport {
    pub state: PlayerState,
    pub bytes: [u8; STATE_SIZE],
    pub bits: u16,
}

/// Parses hex text into bytes.
///
/// Accepts whitespace, commas, `:` separators and optional `0x` prefixes per
/// byte, e.g. `4A A1 8D`, `0x4a,0xa1,0x8d` or `4aa18d`.
pub fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let mut digits = String::with_capacity(input.len());
    for token in input.split(|c: char| c.is_whitespace() || c == ',' || c == ':') {
        let token = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        digits.push_str(token);
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        bail!("invalid hex digit {bad:?} in {input:?}");
    }
    if digits.len() % 2 != 0 {
        bail!("odd number of hex digits in {input:?}");
    }
    (0..digits.len())
        .step_by(2)
        .map(|idx| {
            let pair = &digits[idx..idx + 2];
            u8::from_str_radix(pair, 16).with_context(|| format!("invalid hex byte {pair:?}"))
        })
        .collect()
}

/// Formats bytes as space-separated uppercase hex.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes one snapshot without rejecting checksum mismatches.
pub fn inspect_snapshot(bytes: &[u8]) -> Result<InspectReport> {
    let snapshot = Snapshot::deserialize_from(bytes).context("decode snapshot")?;
    tracing::debug!(bytes = %format_hex(bytes), "decoded snapshot");
    Ok(InspectReport {
        bytes: *snapshot.as_bytes(),
        fields: snapshot.fields(),
        stored_checksum: snapshot.stored_checksum(),
        computed_checksum: snapshot.compute_checksum(),
        valid: snapshot.is_valid(),
    })
}

/// Clamps and encodes field values into checksummed bytes.
pub fn encode_snapshot(fields: SnapshotFields) -> EncodeReport {
    let snapshot = Snapshot::from_fields(fields);
    let clamped = snapshot.fields();
    if clamped != fields {
        tracing::debug!(?fields, ?clamped, "inputs saturated to field ranges");
    }
    EncodeReport {
        fields: clamped,
        bytes: snapshot.serialize(),
        checksum: snapshot.compute_checksum(),
    }
}

/// Encodes a player state word.
pub fn encode_state(state: PlayerState) -> StateReport {
    StateReport {
        state,
        bytes: state.to_bytes(),
        bits: state.to_bits(),
    }
}

/// Renders an inspect report for terminals.
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let fields = &report.fields;
    let status = if report.valid { "valid" } else { "CORRUPT" };
    format!(
        "bytes: [{}]\n\
         x_tile: {}\n\
         x_sub: {}\n\
         y_tile: {}\n\
         velocity_y: {}\n\
         checksum: stored 0x{:X} computed 0x{:X} ({status})",
        format_hex(&report.bytes),
        fields.x_tile,
        fields.x_sub,
        fields.y_tile,
        fields.velocity_y,
        report.stored_checksum,
        report.computed_checksum,
    )
}

/// Runs the reference save/load flow and returns its transcript.
pub fn demo_transcript() -> Vec<String> {
    let mut lines = Vec::new();

    let mut state = PlayerState::new();
    state.power = codec::Power::Star;
    state.direction = codec::Direction::Left;
    state.enemy = codec::Enemy::Goomba;
    state.is_jumping = false;
    state.is_running = true;
    state.set_level(3);
    state.set_lives(3);
    lines.push(format!("player state size: {STATE_SIZE} bytes"));
    lines.push(format!(
        "lives: {}, level: {}, word: 0x{:04X}",
        state.lives(),
        state.level(),
        state.to_bits()
    ));

    let mut snap1 = Snapshot::new();
    snap1.set_position(10, 5, 8);
    snap1.set_velocity(-5);
    lines.push(format!(
        "snapshot 1 raw bytes: [{}]",
        format_hex(snap1.as_bytes())
    ));
    lines.push(format!(
        "computed checksum: 0x{:X}",
        snap1.compute_checksum()
    ));

    let buffer = snap1.serialize();
    lines.push(format!("serialized buffer: [{}]", format_hex(&buffer)));

    let snap2 = Snapshot::deserialize(buffer);
    lines.push(format!(
        "deserialized raw: [{}]",
        format_hex(snap2.as_bytes())
    ));
    lines.push(format!(
        "snapshot 1 valid: {}, snapshot 2 valid: {}",
        snap1.is_valid(),
        snap2.is_valid()
    ));
    lines
}
