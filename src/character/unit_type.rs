//! Character types and their level-1 properties
//!
//! One lookup table keyed by the variant tag. Combat, movement and the
//! range calculator all read from here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::SkirmishError;
use crate::core::types::Side;

/// Concrete kind of character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterType {
    // Player side
    Bowman,    // Balanced, mid range
    Swordsman, // Fast, melee
    Magician,  // Slow, long reach

    // Enemy side
    Vampire,
    Undead,
    Daemon,
}

/// Base properties for a character type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitProperties {
    pub attack: f64,
    pub defence: f64,
    pub move_distance: u32,   // In cells, along lines
    pub attack_distance: u32, // In cells, filled square
    pub side: Side,
}

impl CharacterType {
    pub const PLAYER_TYPES: [CharacterType; 3] = [
        CharacterType::Bowman,
        CharacterType::Swordsman,
        CharacterType::Magician,
    ];

    pub const ENEMY_TYPES: [CharacterType; 3] = [
        CharacterType::Vampire,
        CharacterType::Undead,
        CharacterType::Daemon,
    ];

    /// Allowed spawn types for a side
    pub fn for_side(side: Side) -> &'static [CharacterType] {
        match side {
            Side::Player => &Self::PLAYER_TYPES,
            Side::Enemy => &Self::ENEMY_TYPES,
        }
    }

    /// Get level-1 properties for this type
    pub fn properties(&self) -> UnitProperties {
        match self {
            CharacterType::Bowman => UnitProperties {
                attack: 25.0,
                defence: 25.0,
                move_distance: 2,
                attack_distance: 2,
                side: Side::Player,
            },
            CharacterType::Swordsman => UnitProperties {
                attack: 40.0,
                defence: 10.0,
                move_distance: 4,
                attack_distance: 1,
                side: Side::Player,
            },
            CharacterType::Magician => UnitProperties {
                attack: 10.0,
                defence: 40.0,
                move_distance: 1,
                attack_distance: 4,
                side: Side::Player,
            },
            CharacterType::Vampire => UnitProperties {
                attack: 25.0,
                defence: 25.0,
                move_distance: 2,
                attack_distance: 2,
                side: Side::Enemy,
            },
            CharacterType::Undead => UnitProperties {
                attack: 40.0,
                defence: 10.0,
                move_distance: 4,
                attack_distance: 1,
                side: Side::Enemy,
            },
            CharacterType::Daemon => UnitProperties {
                attack: 10.0,
                defence: 10.0,
                move_distance: 1,
                attack_distance: 4,
                side: Side::Enemy,
            },
        }
    }

    pub fn side(&self) -> Side {
        self.properties().side
    }

    pub fn move_distance(&self) -> u32 {
        self.properties().move_distance
    }

    pub fn attack_distance(&self) -> u32 {
        self.properties().attack_distance
    }

    /// Lowercase tag used in saved games
    pub fn tag(&self) -> &'static str {
        match self {
            CharacterType::Bowman => "bowman",
            CharacterType::Swordsman => "swordsman",
            CharacterType::Magician => "magician",
            CharacterType::Vampire => "vampire",
            CharacterType::Undead => "undead",
            CharacterType::Daemon => "daemon",
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CharacterType {
    type Err = SkirmishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bowman" => Ok(CharacterType::Bowman),
            "swordsman" => Ok(CharacterType::Swordsman),
            "magician" => Ok(CharacterType::Magician),
            "vampire" => Ok(CharacterType::Vampire),
            "undead" => Ok(CharacterType::Undead),
            "daemon" => Ok(CharacterType::Daemon),
            other => Err(SkirmishError::UnknownCharacterType(other.to_string())),
        }
    }
}
