//! Snapshot storage backends

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::Result;
use crate::persistence::snapshot::GameSnapshot;

/// Key-value style storage holding at most one snapshot
pub trait StateStore {
    /// The stored snapshot, or `None` if nothing has been saved
    fn load(&self) -> Result<Option<GameSnapshot>>;

    fn save(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<GameSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: GameSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshot.as_ref()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<GameSnapshot>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.snapshot = None;
        Ok(())
    }
}

/// Store backed by a single JSON file. A missing file means nothing saved.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<GameSnapshot>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), "snapshot loaded");
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(snapshot)?)?;
        debug!(path = %self.path.display(), "snapshot written");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SkirmishError;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("grid_skirmish_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&GameSnapshot::with_max_score(7)).unwrap();
        assert_eq!(store.load().unwrap().unwrap().max_score, Some(7));
        store.clear().unwrap();
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = temp_path("roundtrip");
        let mut store = JsonFileStore::new(&path);
        store.save(&GameSnapshot::with_max_score(42)).unwrap();
        assert_eq!(store.load().unwrap().unwrap().max_score, Some(42));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_missing_file() {
        let store = JsonFileStore::new(temp_path("missing"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_garbage() {
        let path = temp_path("garbage");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(SkirmishError::SerdeError(_))));
        fs::remove_file(&path).unwrap();
    }
}
