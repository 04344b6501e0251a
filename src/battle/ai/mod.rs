//! Enemy decision-making
//!
//! A policy looks at the board and picks at most one action for the enemy
//! side. The controller carries the action out.

mod greedy;

pub use greedy::GreedyEnemy;

use crate::board::PositionRegistry;
use crate::core::types::{Cell, UnitId};

/// What the enemy side does on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    Attack { attacker: UnitId, target_cell: Cell },
    Move { unit: UnitId, to: Cell },
}

/// Trait for enemy AI implementations
pub trait EnemyPolicy {
    /// Choose an action, or `None` to pass
    fn decide(&mut self, registry: &PositionRegistry) -> Option<EnemyAction>;
}
