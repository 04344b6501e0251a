use thiserror::Error;

use crate::core::types::{Cell, UnitId};

#[derive(Error, Debug)]
pub enum SkirmishError {
    #[error("No free cell left in columns {columns:?}")]
    NoFreeCell { columns: Vec<usize> },

    #[error("Cannot generate a team from an empty variant set or zero max level")]
    EmptyTeamSpec,

    #[error("Cell {0} is outside the board")]
    InvalidCell(Cell),

    #[error("Cell {0} is already occupied")]
    CellOccupied(Cell),

    #[error("Unit not found: {0:?}")]
    UnitNotFound(UnitId),

    #[error("Attack target not found at cell {0}")]
    EmptyTarget(Cell),

    #[error("Unknown character type: {0}")]
    UnknownCharacterType(String),

    #[error("Saved state is corrupted or missing: {0}")]
    CorruptSnapshot(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SkirmishError>;
