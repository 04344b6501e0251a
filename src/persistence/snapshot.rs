//! Saved game format
//!
//! JSON shape:
//! `{ "positions": [{ "position": 27, "character": { "type": "bowman", ... } }],
//!    "level": 1, "playerMove": true, "maxScore": 98 }`
//!
//! `level` is the 1-based theme number. Every field is optional on disk; a
//! store holding only `maxScore` is valid for the high score but cannot be
//! restored as a game.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::board::PositionRegistry;
use crate::character::{Character, CharacterType};
use crate::core::constants::{MAX_HEALTH, THEME_COUNT};
use crate::core::error::{Result, SkirmishError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCharacter {
    #[serde(rename = "type")]
    pub character_type: String,
    pub level: u32,
    pub attack: f64,
    pub defence: f64,
    pub health: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPosition {
    pub position: usize,
    pub character: SavedCharacter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<SavedPosition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_move: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<u32>,
}

impl GameSnapshot {
    /// Capture the board and session fields
    pub fn capture(
        registry: &PositionRegistry,
        theme_index: usize,
        player_move: bool,
        max_score: u32,
    ) -> Self {
        let positions = registry
            .positions()
            .iter()
            .map(|p| SavedPosition {
                position: p.cell,
                character: SavedCharacter {
                    character_type: p.character.character_type().tag().to_string(),
                    level: p.character.level,
                    attack: p.character.attack,
                    defence: p.character.defence,
                    health: p.character.health,
                },
            })
            .collect();

        Self {
            positions: Some(positions),
            level: Some(theme_index + 1),
            player_move: Some(player_move),
            max_score: Some(max_score),
        }
    }

    /// Snapshot that only carries a high score
    pub fn with_max_score(max_score: u32) -> Self {
        Self {
            max_score: Some(max_score),
            ..Self::default()
        }
    }

    /// 0-based theme index; a missing level means the first theme
    pub fn theme_index(&self) -> Result<usize> {
        match self.level.unwrap_or(1) {
            level @ 1..=THEME_COUNT => Ok(level - 1),
            level => Err(SkirmishError::CorruptSnapshot(format!(
                "no theme for level {level}"
            ))),
        }
    }

    pub fn player_move(&self) -> bool {
        self.player_move.unwrap_or(true)
    }

    /// Rebuild a full registry; nothing is returned unless every unit is valid
    pub fn to_registry(&self) -> Result<PositionRegistry> {
        let positions = self
            .positions
            .as_ref()
            .ok_or_else(|| SkirmishError::CorruptSnapshot("positions missing".to_string()))?;

        let mut registry = PositionRegistry::new();
        for saved in positions {
            let character = saved.character.to_character()?;
            registry
                .insert_at(character, saved.position)
                .map_err(|e| SkirmishError::CorruptSnapshot(e.to_string()))?;
        }
        Ok(registry)
    }
}

impl SavedCharacter {
    fn to_character(&self) -> Result<Character> {
        let character_type = CharacterType::from_str(&self.character_type)?;
        if !(self.health > 0.0 && self.health <= MAX_HEALTH) {
            return Err(SkirmishError::CorruptSnapshot(format!(
                "{} has health {}",
                self.character_type, self.health
            )));
        }
        if self.level == 0 {
            return Err(SkirmishError::CorruptSnapshot(format!(
                "{} has level 0",
                self.character_type
            )));
        }
        Ok(Character::from_stats(
            character_type,
            self.level,
            self.attack,
            self.defence,
            self.health,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Side;

    const SAVED: &str = r#"{
        "positions": [
            { "position": 27, "character": { "type": "bowman", "level": 2, "attack": 45, "defence": 45, "health": 82 } },
            { "position": 19, "character": { "type": "vampire", "level": 1, "attack": 25, "defence": 25, "health": 47.5 } }
        ],
        "level": 3,
        "playerMove": false,
        "maxScore": 120
    }"#;

    #[test]
    fn test_parse_saved_json() {
        let snapshot: GameSnapshot = serde_json::from_str(SAVED).unwrap();
        assert_eq!(snapshot.theme_index().unwrap(), 2);
        assert!(!snapshot.player_move());
        assert_eq!(snapshot.max_score, Some(120));

        let registry = snapshot.to_registry().unwrap();
        assert_eq!(registry.team_size(Side::Player), 1);
        assert_eq!(registry.team_size(Side::Enemy), 1);
        let bowman = &registry.find_at(27).unwrap().character;
        assert_eq!(bowman.level, 2);
        assert_eq!(bowman.attack, 45.0);
    }

    #[test]
    fn test_serialized_keys() {
        let mut registry = PositionRegistry::new();
        registry
            .insert_at(Character::new(CharacterType::Daemon, 1), 63)
            .unwrap();
        let json = serde_json::to_string(&GameSnapshot::capture(&registry, 0, true, 5)).unwrap();
        assert!(json.contains(r#""type":"daemon""#));
        assert!(json.contains(r#""playerMove":true"#));
        assert!(json.contains(r#""maxScore":5"#));
        assert!(json.contains(r#""level":1"#));
    }

    #[test]
    fn test_defaults_when_fields_absent() {
        let snapshot: GameSnapshot = serde_json::from_str(r#"{"positions": []}"#).unwrap();
        assert_eq!(snapshot.theme_index().unwrap(), 0);
        assert!(snapshot.player_move());
        assert_eq!(snapshot.max_score, None);
    }

    #[test]
    fn test_missing_positions() {
        let snapshot = GameSnapshot::with_max_score(10);
        assert!(matches!(
            snapshot.to_registry(),
            Err(SkirmishError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_unknown_type() {
        let snapshot: GameSnapshot = serde_json::from_str(
            r#"{"positions": [{"position": 0, "character": {"type": "dragon", "level": 1, "attack": 1, "defence": 1, "health": 50}}]}"#,
        )
        .unwrap();
        assert!(matches!(
            snapshot.to_registry(),
            Err(SkirmishError::UnknownCharacterType(t)) if t == "dragon"
        ));
    }

    #[test]
    fn test_duplicate_cell_is_corrupt() {
        let mut snapshot: GameSnapshot = serde_json::from_str(SAVED).unwrap();
        if let Some(positions) = snapshot.positions.as_mut() {
            positions[1].position = 27;
        }
        assert!(matches!(
            snapshot.to_registry(),
            Err(SkirmishError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_level_out_of_range() {
        let snapshot = GameSnapshot {
            level: Some(5),
            ..GameSnapshot::default()
        };
        assert!(snapshot.theme_index().is_err());
    }

    #[test]
    fn test_dead_unit_is_corrupt() {
        let mut snapshot: GameSnapshot = serde_json::from_str(SAVED).unwrap();
        if let Some(positions) = snapshot.positions.as_mut() {
            positions[0].character.health = 0.0;
        }
        assert!(snapshot.to_registry().is_err());
    }
}
