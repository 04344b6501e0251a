//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::constants::{BOARD_CELLS, BOARD_SIZE};

/// Board address: row-major index 0..63
pub type Cell = usize;

/// Unique identifier for a unit placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

/// Row/column view of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridCoord {
    pub row: i32,
    pub col: i32,
}

impl GridCoord {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn from_cell(cell: Cell) -> Self {
        Self {
            row: (cell / BOARD_SIZE) as i32,
            col: (cell % BOARD_SIZE) as i32,
        }
    }

    /// Back to a cell index. The coordinate must be on the board.
    pub fn to_cell(&self) -> Cell {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Max of row and column offsets
    pub fn chebyshev_distance(&self, other: &Self) -> u32 {
        let dr = (self.row - other.row).unsigned_abs();
        let dc = (self.col - other.col).unsigned_abs();
        dr.max(dc)
    }

    /// Same row, same column or same diagonal
    pub fn is_aligned_with(&self, other: &Self) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr == 0 || dc == 0 || dr == dc
    }
}

pub fn is_valid_cell(cell: Cell) -> bool {
    cell < BOARD_CELLS
}

/// Which team a unit fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// Whose move it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    Player,
    Enemy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_round_trip_corners() {
        assert_eq!(GridCoord::from_cell(0), GridCoord::new(0, 0));
        assert_eq!(GridCoord::from_cell(7), GridCoord::new(0, 7));
        assert_eq!(GridCoord::from_cell(63), GridCoord::new(7, 7));
        assert_eq!(GridCoord::new(3, 3).to_cell(), 27);
    }

    #[test]
    fn test_alignment() {
        let center = GridCoord::new(3, 3);
        assert!(center.is_aligned_with(&GridCoord::new(3, 7)));
        assert!(center.is_aligned_with(&GridCoord::new(0, 3)));
        assert!(center.is_aligned_with(&GridCoord::new(1, 1)));
        assert!(!center.is_aligned_with(&GridCoord::new(1, 2)));
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = GridCoord::new(0, 0);
        assert_eq!(a.chebyshev_distance(&GridCoord::new(2, 5)), 5);
        assert_eq!(a.chebyshev_distance(&a), 0);
    }

    #[test]
    fn test_valid_cell() {
        assert!(is_valid_cell(63));
        assert!(!is_valid_cell(64));
    }
}
