//! The 16-bit player state word.
//!
//! Independent of [`Snapshot`](crate::Snapshot): it carries no checksum and
//! is encoded little-endian, bit 0 being the least significant bit.
//!
//! ```text
//! byte0: [lives:3 | running:1 | jumping:1 | direction:1 | power:2]  bits 7..5 | 4 | 3 | 2 | 1..0
//! byte1: [reserved:2 | enemy:2 | level:4]                           bits 7..6 | 5..4 | 3..0
//! ```

use bitfield::{clamp_unsigned, ByteField};

/// Encoded player state size in bytes.
pub const STATE_SIZE: usize = 2;

/// Width of the remaining-lives counter.
pub const LIVES_BITS: u8 = 3;
/// Width of the level number.
pub const LEVEL_BITS: u8 = 4;

const POWER: ByteField = ByteField::new(0, 2);
const DIRECTION: ByteField = ByteField::new(2, 1);
const JUMPING: ByteField = ByteField::new(3, 1);
const RUNNING: ByteField = ByteField::new(4, 1);
const LIVES: ByteField = ByteField::new(5, LIVES_BITS);
const LEVEL: ByteField = ByteField::new(0, LEVEL_BITS);
const ENEMY: ByteField = ByteField::new(4, 2);
const RESERVED: ByteField = ByteField::new(6, 2);

/// Power-up level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Power {
    #[default]
    Small,
    Super,
    Fire,
    Star,
}

impl Power {
    /// Decodes the low 2 bits of `raw`.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw & 0b11 {
            0 => Self::Small,
            1 => Self::Super,
            2 => Self::Fire,
            _ => Self::Star,
        }
    }

    /// Returns the 2-bit encoding.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Facing direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Direction {
    #[default]
    Left,
    Right,
}

impl Direction {
    /// Decodes the low bit of `raw`.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        if raw & 1 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Returns the 1-bit encoding.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Nearest enemy type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u8)]
pub enum Enemy {
    #[default]
    None,
    Goomba,
    Koopa,
    Bowser,
}

impl Enemy {
    /// Decodes the low 2 bits of `raw`.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw & 0b11 {
            0 => Self::None,
            1 => Self::Goomba,
            2 => Self::Koopa,
            _ => Self::Bowser,
        }
    }

    /// Returns the 2-bit encoding.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Packed runtime state of the player character.
///
/// Counters saturate like the snapshot fields do. The two reserved bits are
/// carried through decode/encode untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerState {
    pub power: Power,
    pub direction: Direction,
    pub is_jumping: bool,
    pub is_running: bool,
    lives: u8,
    level: u8,
    pub enemy: Enemy,
    reserved: u8,
}

impl PlayerState {
    /// Creates an all-zero state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            power: Power::Small,
            direction: Direction::Left,
            is_jumping: false,
            is_running: false,
            lives: 0,
            level: 0,
            enemy: Enemy::None,
            reserved: 0,
        }
    }

    /// Remaining lives (0-7).
    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.lives
    }

    /// Sets remaining lives, saturating at 7.
    pub fn set_lives(&mut self, lives: u8) {
        self.lives = clamp_unsigned(lives, LIVES_BITS);
    }

    /// Current level number (0-15).
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Sets the level number, saturating at 15.
    pub fn set_level(&mut self, level: u8) {
        self.level = clamp_unsigned(level, LEVEL_BITS);
    }

    /// Reserved bits as last decoded.
    #[must_use]
    pub const fn reserved(&self) -> u8 {
        self.reserved
    }

    /// Encodes to 2 little-endian bytes.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; STATE_SIZE] {
        let mut byte0 = POWER.insert(0, self.power.raw());
        byte0 = DIRECTION.insert(byte0, self.direction.raw());
        byte0 = JUMPING.insert(byte0, self.is_jumping as u8);
        byte0 = RUNNING.insert(byte0, self.is_running as u8);
        byte0 = LIVES.insert(byte0, self.lives);

        let mut byte1 = LEVEL.insert(0, self.level);
        byte1 = ENEMY.insert(byte1, self.enemy.raw());
        byte1 = RESERVED.insert(byte1, self.reserved);

        [byte0, byte1]
    }

    /// Decodes from 2 little-endian bytes. Every bit pattern is valid.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; STATE_SIZE]) -> Self {
        let [byte0, byte1] = bytes;
        Self {
            power: Power::from_raw(POWER.extract(byte0)),
            direction: Direction::from_raw(DIRECTION.extract(byte0)),
            is_jumping: JUMPING.extract(byte0) != 0,
            is_running: RUNNING.extract(byte0) != 0,
            lives: LIVES.extract(byte0),
            level: LEVEL.extract(byte1),
            enemy: Enemy::from_raw(ENEMY.extract(byte1)),
            reserved: RESERVED.extract(byte1),
        }
    }

    /// Encodes as a 16-bit word.
    #[must_use]
    pub const fn to_bits(&self) -> u16 {
        u16::from_le_bytes(self.to_bytes())
    }

    /// Decodes from a 16-bit word.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self::from_bytes(bits.to_le_bytes())
    }
}
