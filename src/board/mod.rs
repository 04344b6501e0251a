//! Board - who stands where, rosters and reach
//!
//! Cells are row-major indices on an 8x8 grid. The registry is the only
//! place that mutates positions, so occupancy always matches its contents.

pub mod range;
pub mod registry;
pub mod team;

pub use range::{attack_range, line_cells, move_range, square_cells};
pub use registry::{PositionRegistry, PositionedCharacter};
pub use team::Team;
