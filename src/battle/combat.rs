//! Damage resolution
//!
//! Damage is the attack/defence difference with a floor of 10% of the
//! attacker's attack, rounded to one decimal. The presenter's damage display
//! completes before health is touched.

use tracing::debug;

use crate::board::PositionRegistry;
use crate::character::Character;
use crate::core::constants::CHIP_DAMAGE_RATIO;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::{Cell, Side, UnitId};
use crate::presentation::Presenter;

/// Result of a single attack
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub target: UnitId,
    pub target_cell: Cell,
    pub target_side: Side,
    pub damage: f64,
    pub killed: bool,
}

/// Damage dealt by `attacker` to `defender`
pub fn calculate_damage(attacker: &Character, defender: &Character) -> f64 {
    let raw = (attacker.attack - defender.defence).max(attacker.attack * CHIP_DAMAGE_RATIO);
    (raw * 10.0).round() / 10.0
}

/// Subtract `damage` from whoever stands on `target_cell`, removing them on death
pub fn apply_damage(
    registry: &mut PositionRegistry,
    target_cell: Cell,
    damage: f64,
) -> Result<AttackOutcome> {
    let target = registry
        .find_at_mut(target_cell)
        .ok_or(SkirmishError::EmptyTarget(target_cell))?;

    let id = target.id;
    let side = target.side();
    let killed = target.character.take_damage(damage);

    if killed {
        registry.remove(id);
        debug!(cell = target_cell, ?side, "unit killed");
    }

    Ok(AttackOutcome {
        target: id,
        target_cell,
        target_side: side,
        damage,
        killed,
    })
}

/// Full attack: compute damage, wait for the presenter to show it, then apply
pub async fn resolve_attack<P: Presenter>(
    registry: &mut PositionRegistry,
    presenter: &mut P,
    attacker: &Character,
    target_cell: Cell,
) -> Result<AttackOutcome> {
    let defender = registry
        .find_at(target_cell)
        .ok_or(SkirmishError::EmptyTarget(target_cell))?;
    let damage = calculate_damage(attacker, &defender.character);

    debug!(
        attacker = %attacker.character_type(),
        defender = %defender.character.character_type(),
        cell = target_cell,
        damage,
        "attack"
    );

    presenter.show_damage(target_cell, damage).await;
    apply_damage(registry, target_cell, damage)
}
