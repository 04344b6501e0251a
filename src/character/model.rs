//! Characters: a concrete type plus mutable combat stats

use serde::{Deserialize, Serialize};

use crate::character::unit_type::CharacterType;
use crate::core::constants::{BASE_HEALTH, LEVEL_UP_BASE, MAX_HEALTH};
use crate::core::types::Side;

/// A single combatant
///
/// Only constructible through [`Character::new`], so every character carries
/// a concrete type and starts from that type's table stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    character_type: CharacterType,
    pub level: u32,
    pub attack: f64,
    pub defence: f64,
    pub health: f64,
}

impl Character {
    /// Create a character with level-1 table stats and the given level
    pub fn new(character_type: CharacterType, level: u32) -> Self {
        let props = character_type.properties();
        Self {
            character_type,
            level: level.max(1),
            attack: props.attack,
            defence: props.defence,
            health: BASE_HEALTH,
        }
    }

    /// Rebuild a character from saved stats
    pub fn from_stats(
        character_type: CharacterType,
        level: u32,
        attack: f64,
        defence: f64,
        health: f64,
    ) -> Self {
        Self {
            character_type,
            level,
            attack,
            defence,
            health,
        }
    }

    pub fn character_type(&self) -> CharacterType {
        self.character_type
    }

    pub fn side(&self) -> Side {
        self.character_type.side()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Subtract damage. Returns true if the character died.
    pub fn take_damage(&mut self, damage: f64) -> bool {
        self.health -= damage;
        !self.is_alive()
    }

    /// Promote by one level
    ///
    /// Attack and defence never decrease; survivors with more health grow
    /// faster. Health resets to `level + 80`, capped at 100.
    pub fn level_up(&mut self) {
        self.level += 1;
        let factor = LEVEL_UP_BASE + self.health;
        self.attack = self.attack.max((self.attack * factor / 100.0).round());
        self.defence = self.defence.max(self.defence * factor / 100.0);
        self.health = MAX_HEALTH.min(self.level as f64 + LEVEL_UP_BASE);
    }

    pub fn level_up_by(&mut self, levels: u32) {
        for _ in 0..levels {
            self.level_up();
        }
    }

    /// Back to level 1 with table stats and base health
    pub fn reset(&mut self) {
        let props = self.character_type.properties();
        self.level = 1;
        self.health = BASE_HEALTH;
        self.attack = props.attack;
        self.defence = props.defence;
    }

    /// Tooltip text: level, attack, defence, health
    pub fn info(&self) -> String {
        format!(
            "\u{1F396}{} \u{2694}{} \u{1F6E1}{} \u{2764}{}",
            self.level, self.attack, self.defence, self.health
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_stats() {
        let bowman = Character::new(CharacterType::Bowman, 1);
        assert_eq!(bowman.level, 1);
        assert_eq!(bowman.attack, 25.0);
        assert_eq!(bowman.defence, 25.0);
        assert_eq!(bowman.health, BASE_HEALTH);

        let swordsman = Character::new(CharacterType::Swordsman, 1);
        assert_eq!(swordsman.attack, 40.0);
        assert_eq!(swordsman.defence, 10.0);

        let magician = Character::new(CharacterType::Magician, 1);
        assert_eq!(magician.attack, 10.0);
        assert_eq!(magician.defence, 40.0);
    }

    #[test]
    fn test_level_zero_clamped() {
        assert_eq!(Character::new(CharacterType::Undead, 0).level, 1);
    }

    #[test]
    fn test_take_damage_reports_death() {
        let mut vampire = Character::new(CharacterType::Vampire, 1);
        assert!(!vampire.take_damage(49.9));
        assert!(vampire.take_damage(0.1));
        assert!(!vampire.is_alive());
    }

    #[test]
    fn test_level_up_full_health() {
        let mut swordsman = Character::new(CharacterType::Swordsman, 1);
        swordsman.health = 100.0;
        swordsman.level_up();

        assert_eq!(swordsman.level, 2);
        // 40 * 180 / 100 = 72
        assert_eq!(swordsman.attack, 72.0);
        // 10 * 180 / 100 = 18
        assert!((swordsman.defence - 18.0).abs() < 1e-9);
        assert_eq!(swordsman.health, 82.0);
    }

    #[test]
    fn test_level_up_never_decreases() {
        let mut bowman = Character::new(CharacterType::Bowman, 1);
        bowman.health = 1.0;
        bowman.level_up();
        // growth factor 0.81 would shrink stats, so they stay
        assert_eq!(bowman.attack, 25.0);
        assert_eq!(bowman.defence, 25.0);
    }

    #[test]
    fn test_level_up_health_capped() {
        let mut magician = Character::new(CharacterType::Magician, 1);
        magician.level_up_by(30);
        assert_eq!(magician.level, 31);
        assert_eq!(magician.health, 100.0);
    }

    #[test]
    fn test_reset_restores_table_stats() {
        let mut daemon = Character::new(CharacterType::Daemon, 1);
        daemon.level_up_by(3);
        daemon.health = 12.5;
        daemon.reset();
        assert_eq!(daemon, Character::new(CharacterType::Daemon, 1));
    }

    #[test]
    fn test_info_format() {
        let mut bowman = Character::new(CharacterType::Bowman, 1);
        bowman.health = 100.0;
        assert_eq!(bowman.info(), "🎖1 ⚔25 🛡25 ❤100");

        bowman.health = 47.5;
        assert_eq!(bowman.info(), "🎖1 ⚔25 🛡25 ❤47.5");
    }
}
