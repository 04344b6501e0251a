//! Move and attack ranges
//!
//! Movement follows straight lines (row, column, diagonal). Occupied cells
//! are never destinations but do not block the line behind them. Attack
//! reach is a filled square clamped to the board and ignores occupancy.
//! Both are recomputed on every call.

use crate::board::registry::PositionRegistry;
use crate::character::CharacterType;
use crate::core::constants::BOARD_SIZE;
use crate::core::types::{Cell, GridCoord};

/// Cells on a row, column or diagonal through `cell`, at most `distance` away.
/// Includes `cell` itself.
pub fn line_cells(cell: Cell, distance: u32) -> Vec<Cell> {
    let start = GridCoord::from_cell(cell);
    (0..BOARD_SIZE * BOARD_SIZE)
        .filter(|&candidate| {
            let coord = GridCoord::from_cell(candidate);
            start.chebyshev_distance(&coord) <= distance && start.is_aligned_with(&coord)
        })
        .collect()
}

/// Cells of the square of radius `distance` around `cell`, clamped to the board
pub fn square_cells(cell: Cell, distance: u32) -> Vec<Cell> {
    let start = GridCoord::from_cell(cell);
    let d = distance as i32;
    let last = BOARD_SIZE as i32 - 1;

    let min_row = (start.row - d).max(0);
    let max_row = (start.row + d).min(last);
    let min_col = (start.col - d).max(0);
    let max_col = (start.col + d).min(last);

    let mut cells = Vec::new();
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            cells.push(GridCoord::new(row, col).to_cell());
        }
    }
    cells
}

/// Free cells a character of this type standing on `cell` may move to,
/// in ascending cell order
pub fn move_range(
    registry: &PositionRegistry,
    character_type: CharacterType,
    cell: Cell,
) -> Vec<Cell> {
    line_cells(cell, character_type.move_distance())
        .into_iter()
        .filter(|c| !registry.is_occupied(*c))
        .collect()
}

/// Cells a character of this type standing on `cell` can strike
pub fn attack_range(character_type: CharacterType, cell: Cell) -> Vec<Cell> {
    square_cells(cell, character_type.attack_distance())
}
