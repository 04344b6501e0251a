//! Game configuration loaded from TOML
//!
//! Rules that define the game itself (board size, theme count, team-size
//! schedule, base stats) live in `core::constants`. This struct only holds
//! the knobs a player or test harness may reasonably change.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{BOARD_SIZE, MAX_TEAM_SIZE};
use crate::core::error::{Result, SkirmishError};

/// Configuration for a game session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Columns where player units are spawned
    pub player_columns: Vec<usize>,

    /// Columns where enemy units are spawned
    pub enemy_columns: Vec<usize>,

    /// Units per side on the first level
    pub starting_team_size: usize,

    /// Seed for the game RNG
    ///
    /// `None` seeds from entropy. Set it for reproducible games.
    pub seed: Option<u64>,

    /// How long the terminal presenter holds a damage number (milliseconds)
    pub damage_delay_ms: u64,

    /// Where the file store keeps the JSON snapshot
    pub save_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_columns: vec![0, 1],
            enemy_columns: vec![6, 7],
            starting_team_size: 2,
            seed: None,
            damage_delay_ms: 300,
            save_path: PathBuf::from("skirmish_save.json"),
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        for (name, columns) in [("player", &self.player_columns), ("enemy", &self.enemy_columns)] {
            if columns.is_empty() {
                return Err(SkirmishError::InvalidConfig(format!("{name}_columns is empty")));
            }
            if let Some(col) = columns.iter().find(|c| **c >= BOARD_SIZE) {
                return Err(SkirmishError::InvalidConfig(format!(
                    "{name}_columns contains {col}, board has {BOARD_SIZE} columns"
                )));
            }
            // The last level fields MAX_TEAM_SIZE units per side
            if columns.len() * BOARD_SIZE < MAX_TEAM_SIZE {
                return Err(SkirmishError::InvalidConfig(format!(
                    "{name}_columns cannot hold {MAX_TEAM_SIZE} units"
                )));
            }
        }

        if self
            .player_columns
            .iter()
            .any(|c| self.enemy_columns.contains(c))
        {
            return Err(SkirmishError::InvalidConfig(
                "player_columns and enemy_columns overlap".into(),
            ));
        }

        if self.starting_team_size == 0 || self.starting_team_size > MAX_TEAM_SIZE {
            return Err(SkirmishError::InvalidConfig(format!(
                "starting_team_size ({}) must be within 1..={MAX_TEAM_SIZE}",
                self.starting_team_size
            )));
        }

        Ok(())
    }
}

/// Load and validate a config from a TOML file
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let contents = fs::read_to_string(path)?;
    let config: GameConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
