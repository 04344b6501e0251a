//! Battle flow - attacks, enemy AI, levels and the turn controller
//!
//! The controller is the single owner of the board. Combat and AI are
//! plain functions over the registry that it calls in order:
//! player action -> enemy action -> round check.

pub mod ai;
pub mod combat;
pub mod controller;
pub mod events;
pub mod level;

// Re-exports for convenient access
pub use ai::{EnemyAction, EnemyPolicy, GreedyEnemy};
pub use combat::{apply_damage, calculate_damage, resolve_attack, AttackOutcome};
pub use controller::{GameController, TurnPhase};
pub use events::{GameEvent, GameEventKind, GameEventLog};
pub use level::{calculate_score, is_final_theme, next_theme_index, team_size_for_level};
