//! Characters - the six unit types, their stats and random generation

pub mod generator;
pub mod model;
pub mod unit_type;

pub use generator::{generate_team, CharacterGenerator};
pub use model::Character;
pub use unit_type::{CharacterType, UnitProperties};
