//! Board tile classification for drawing the frame

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl TileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileType::TopLeft => "top-left",
            TileType::Top => "top",
            TileType::TopRight => "top-right",
            TileType::Left => "left",
            TileType::Center => "center",
            TileType::Right => "right",
            TileType::BottomLeft => "bottom-left",
            TileType::Bottom => "bottom",
            TileType::BottomRight => "bottom-right",
        }
    }

    pub fn is_left_edge(&self) -> bool {
        matches!(self, TileType::TopLeft | TileType::Left | TileType::BottomLeft)
    }

    pub fn is_right_edge(&self) -> bool {
        matches!(self, TileType::TopRight | TileType::Right | TileType::BottomRight)
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a cell of a square board by which edges it touches
pub fn calc_tile_type(index: usize, board_size: usize) -> TileType {
    let row = index / board_size;
    let col = index % board_size;
    let last = board_size.saturating_sub(1);

    match (row == 0, row == last, col == 0, col == last) {
        (true, _, true, _) => TileType::TopLeft,
        (true, _, _, true) => TileType::TopRight,
        (true, _, _, _) => TileType::Top,
        (_, true, true, _) => TileType::BottomLeft,
        (_, true, _, true) => TileType::BottomRight,
        (_, true, _, _) => TileType::Bottom,
        (_, _, true, _) => TileType::Left,
        (_, _, _, true) => TileType::Right,
        _ => TileType::Center,
    }
}
