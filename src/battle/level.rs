//! Level progression: team sizes, theme order and score

use crate::board::PositionRegistry;
use crate::core::constants::THEME_COUNT;
use crate::core::types::Side;

/// Units per side for a 1-based level
pub fn team_size_for_level(level: usize) -> usize {
    match level {
        2 => 3,
        l if l >= 3 => 5,
        _ => 2,
    }
}

/// Theme index that follows `index`, wrapping after the last theme
pub fn next_theme_index(index: usize) -> usize {
    (index + 1) % THEME_COUNT
}

/// Clearing the last theme ends the game
pub fn is_final_theme(index: usize) -> bool {
    index + 1 >= THEME_COUNT
}

/// Sum of living player health, each unit rounded to the nearest integer
pub fn calculate_score(registry: &PositionRegistry) -> u32 {
    registry
        .team_units(Side::Player)
        .iter()
        .map(|p| p.character.health.round().max(0.0) as u32)
        .sum()
}
