//! Game constants - board geometry, roster sizes and base stats in one place

// Board
pub const BOARD_SIZE: usize = 8;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

// Levels
pub const THEME_COUNT: usize = 4;
pub const MAX_TEAM_SIZE: usize = 5;

// Character stats
pub const BASE_HEALTH: f64 = 50.0;
pub const MAX_HEALTH: f64 = 100.0;
/// Minimum damage as a fraction of the attacker's attack
pub const CHIP_DAMAGE_RATIO: f64 = 0.1;
/// Level-up growth uses (LEVEL_UP_BASE + health) / 100
pub const LEVEL_UP_BASE: f64 = 80.0;
