//! Greedy enemy: hit the nearest player unit in reach, otherwise step forward

use tracing::debug;

use crate::battle::ai::{EnemyAction, EnemyPolicy};
use crate::board::{attack_range, move_range, PositionRegistry};
use crate::core::types::Side;

/// Attacks the closest reachable player unit, else moves the first enemy
///
/// "Closest" is the difference of linear cell indices, so a unit one row
/// down (8) ranks behind one seven columns across (7).
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEnemy;

impl GreedyEnemy {
    pub fn new() -> Self {
        Self
    }
}

impl EnemyPolicy for GreedyEnemy {
    fn decide(&mut self, registry: &PositionRegistry) -> Option<EnemyAction> {
        let enemies = registry.team_units(Side::Enemy);
        let players = registry.team_units(Side::Player);

        let mut best: Option<(EnemyAction, usize)> = None;
        for enemy in &enemies {
            let reach = attack_range(enemy.character.character_type(), enemy.cell);
            for player in players.iter().filter(|p| reach.contains(&p.cell)) {
                let distance = enemy.cell.abs_diff(player.cell);
                // Strict: earlier pairs win ties
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((
                        EnemyAction::Attack {
                            attacker: enemy.id,
                            target_cell: player.cell,
                        },
                        distance,
                    ));
                }
            }
        }

        if let Some((action, distance)) = best {
            debug!(?action, distance, "enemy attacks");
            return Some(action);
        }

        let first = registry.get(registry.team(Side::Enemy).first()?)?;
        let to = *move_range(registry, first.character.character_type(), first.cell).first()?;
        debug!(from = first.cell, to, "enemy advances");
        Some(EnemyAction::Move { unit: first.id, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, CharacterType};

    #[test]
    fn test_attacks_nearest_by_index() {
        let mut registry = PositionRegistry::new();
        // Daemon reaches the whole centre of the board
        let daemon = registry
            .insert_at(Character::new(CharacterType::Daemon, 1), 27)
            .unwrap();
        registry
            .insert_at(Character::new(CharacterType::Bowman, 1), 35)
            .unwrap();
        registry
            .insert_at(Character::new(CharacterType::Magician, 1), 30)
            .unwrap();

        let action = GreedyEnemy::new().decide(&registry);
        assert_eq!(
            action,
            Some(EnemyAction::Attack {
                attacker: daemon,
                target_cell: 30
            })
        );
    }

    #[test]
    fn test_tie_keeps_first_found() {
        let mut registry = PositionRegistry::new();
        let vampire = registry
            .insert_at(Character::new(CharacterType::Vampire, 1), 27)
            .unwrap();
        registry
            .insert_at(Character::new(CharacterType::Bowman, 1), 26)
            .unwrap();
        registry
            .insert_at(Character::new(CharacterType::Swordsman, 1), 28)
            .unwrap();

        let action = GreedyEnemy::new().decide(&registry);
        assert_eq!(
            action,
            Some(EnemyAction::Attack {
                attacker: vampire,
                target_cell: 26
            })
        );
    }

    #[test]
    fn test_moves_first_enemy_when_nothing_in_reach() {
        let mut registry = PositionRegistry::new();
        let undead = registry
            .insert_at(Character::new(CharacterType::Undead, 1), 7)
            .unwrap();
        registry
            .insert_at(Character::new(CharacterType::Vampire, 1), 63)
            .unwrap();
        registry
            .insert_at(Character::new(CharacterType::Bowman, 1), 56)
            .unwrap();

        let action = GreedyEnemy::new().decide(&registry);
        // Lowest free cell on a line from 7 within 4 steps
        assert_eq!(action, Some(EnemyAction::Move { unit: undead, to: 3 }));
    }

    #[test]
    fn test_no_enemies_passes() {
        let mut registry = PositionRegistry::new();
        registry
            .insert_at(Character::new(CharacterType::Bowman, 1), 0)
            .unwrap();
        assert_eq!(GreedyEnemy::new().decide(&registry), None);
    }
}
