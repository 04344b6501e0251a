//! Saving and restoring games

pub mod snapshot;
pub mod store;

pub use snapshot::{GameSnapshot, SavedCharacter, SavedPosition};
pub use store::{JsonFileStore, MemoryStore, StateStore};
