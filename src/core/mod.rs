pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{load_config, GameConfig};
pub use error::{Result, SkirmishError};
pub use types::{Cell, GridCoord, Side, Turn, UnitId};
