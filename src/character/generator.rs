//! Random character and team generation

use rand::seq::SliceRandom;
use rand::Rng;

use crate::character::model::Character;
use crate::character::unit_type::CharacterType;
use crate::core::error::{Result, SkirmishError};

/// Endless stream of random characters
///
/// Each item has a type drawn uniformly from the allowed set and a level
/// drawn uniformly from `1..=max_level`. Yields nothing if the allowed set
/// is empty or `max_level` is zero.
pub struct CharacterGenerator<'a, R: Rng> {
    allowed: &'a [CharacterType],
    max_level: u32,
    rng: &'a mut R,
}

impl<'a, R: Rng> CharacterGenerator<'a, R> {
    pub fn new(allowed: &'a [CharacterType], max_level: u32, rng: &'a mut R) -> Self {
        Self {
            allowed,
            max_level,
            rng,
        }
    }
}

impl<R: Rng> Iterator for CharacterGenerator<'_, R> {
    type Item = Character;

    fn next(&mut self) -> Option<Character> {
        if self.max_level == 0 {
            return None;
        }
        let character_type = *self.allowed.choose(&mut *self.rng)?;
        let level = self.rng.gen_range(1..=self.max_level);
        Some(Character::new(character_type, level))
    }
}

/// Generate exactly `count` independent characters
pub fn generate_team<R: Rng>(
    allowed: &[CharacterType],
    max_level: u32,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Character>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if allowed.is_empty() || max_level == 0 {
        return Err(SkirmishError::EmptyTeamSpec);
    }

    let team: Vec<Character> = CharacterGenerator::new(allowed, max_level, rng)
        .take(count)
        .collect();
    Ok(team)
}
