//! Position registry: every living character bound to a unique cell
//!
//! The registry owns the characters, both team rosters and the occupancy
//! set. Occupancy is rebuilt from `positions` after every mutation and is
//! never edited on its own.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::board::team::Team;
use crate::character::Character;
use crate::core::constants::BOARD_SIZE;
use crate::core::error::{Result, SkirmishError};
use crate::core::types::{is_valid_cell, Cell, Side, UnitId};

/// A character bound to a board cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedCharacter {
    pub id: UnitId,
    pub character: Character,
    pub cell: Cell,
}

impl PositionedCharacter {
    pub fn new(character: Character, cell: Cell) -> Self {
        Self {
            id: UnitId::new(),
            character,
            cell,
        }
    }

    pub fn side(&self) -> Side {
        self.character.side()
    }
}

/// All living characters on the board
#[derive(Debug, Clone)]
pub struct PositionRegistry {
    positions: Vec<PositionedCharacter>,
    occupied: BTreeSet<Cell>,
    player_team: Team,
    enemy_team: Team,
}

impl Default for PositionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionRegistry {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            occupied: BTreeSet::new(),
            player_team: Team::new(Side::Player),
            enemy_team: Team::new(Side::Enemy),
        }
    }

    /// Place a character on a random free cell in one of `columns`
    pub fn place<R: Rng>(
        &mut self,
        character: Character,
        columns: &[usize],
        rng: &mut R,
    ) -> Result<UnitId> {
        let candidates: Vec<Cell> = (0..BOARD_SIZE)
            .flat_map(|row| {
                columns
                    .iter()
                    .filter(|col| **col < BOARD_SIZE)
                    .map(move |col| row * BOARD_SIZE + col)
            })
            .filter(|cell| !self.occupied.contains(cell))
            .collect();

        let cell = *candidates
            .choose(rng)
            .ok_or_else(|| SkirmishError::NoFreeCell {
                columns: columns.to_vec(),
            })?;

        self.insert_at(character, cell)
    }

    /// Place a whole team, in order
    pub fn place_team<R: Rng>(
        &mut self,
        characters: Vec<Character>,
        columns: &[usize],
        rng: &mut R,
    ) -> Result<Vec<UnitId>> {
        let mut ids = Vec::with_capacity(characters.len());
        for character in characters {
            ids.push(self.place(character, columns, &mut *rng)?);
        }
        Ok(ids)
    }

    /// Bind a character to a specific cell
    pub fn insert_at(&mut self, character: Character, cell: Cell) -> Result<UnitId> {
        if !is_valid_cell(cell) {
            return Err(SkirmishError::InvalidCell(cell));
        }
        if self.occupied.contains(&cell) {
            return Err(SkirmishError::CellOccupied(cell));
        }

        let positioned = PositionedCharacter::new(character, cell);
        let id = positioned.id;
        self.team_mut(positioned.side()).add(id);
        self.positions.push(positioned);
        self.sync_occupancy();
        Ok(id)
    }

    /// Relocate a unit. The caller has already checked the move range.
    pub fn move_unit(&mut self, id: UnitId, new_cell: Cell) -> Result<()> {
        if !is_valid_cell(new_cell) {
            return Err(SkirmishError::InvalidCell(new_cell));
        }
        if self.occupied.contains(&new_cell) {
            return Err(SkirmishError::CellOccupied(new_cell));
        }

        let unit = self.get_mut(id).ok_or(SkirmishError::UnitNotFound(id))?;
        unit.cell = new_cell;
        self.sync_occupancy();
        Ok(())
    }

    /// Delete a unit from the board and from its roster
    pub fn remove(&mut self, id: UnitId) -> Option<PositionedCharacter> {
        let index = self.positions.iter().position(|p| p.id == id)?;
        let removed = self.positions.remove(index);
        self.player_team.remove(id);
        self.enemy_team.remove(id);
        self.sync_occupancy();
        Some(removed)
    }

    pub fn find_at(&self, cell: Cell) -> Option<&PositionedCharacter> {
        self.positions.iter().find(|p| p.cell == cell)
    }

    pub fn find_at_mut(&mut self, cell: Cell) -> Option<&mut PositionedCharacter> {
        self.positions.iter_mut().find(|p| p.cell == cell)
    }

    pub fn get(&self, id: UnitId) -> Option<&PositionedCharacter> {
        self.positions.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut PositionedCharacter> {
        self.positions.iter_mut().find(|p| p.id == id)
    }

    pub fn positions(&self) -> &[PositionedCharacter] {
        &self.positions
    }

    pub fn occupied(&self) -> &BTreeSet<Cell> {
        &self.occupied
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Player => &self.player_team,
            Side::Enemy => &self.enemy_team,
        }
    }

    fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Player => &mut self.player_team,
            Side::Enemy => &mut self.enemy_team,
        }
    }

    /// Units of one side in roster order
    pub fn team_units(&self, side: Side) -> Vec<&PositionedCharacter> {
        self.team(side)
            .members()
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    pub fn team_size(&self, side: Side) -> usize {
        self.team(side).len()
    }

    fn sync_occupancy(&mut self) {
        self.occupied = self.positions.iter().map(|p| p.cell).collect();
    }
}
