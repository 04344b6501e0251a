//! Level themes, highlight colours and cursors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::THEME_COUNT;

/// Cosmetic level identifier. The index also drives difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Prairie,
    Desert,
    Arctic,
    Mountain,
}

impl Theme {
    pub const ALL: [Theme; THEME_COUNT] = [
        Theme::Prairie,
        Theme::Desert,
        Theme::Arctic,
        Theme::Mountain,
    ];

    /// Theme for a 0-based index, wrapping past the last one
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % THEME_COUNT]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Prairie => "prairie",
            Theme::Desert => "desert",
            Theme::Arctic => "arctic",
            Theme::Mountain => "mountain",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cell highlight colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightColor {
    Yellow, // Selected unit
    Green,  // Reachable empty cell
    Red,    // Attackable enemy
}

/// Pointer feedback while hovering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Auto,
    Pointer,
    Crosshair,
    NotAllowed,
}
