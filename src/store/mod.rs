//! Record storage
//!
//! A [`SchoolStore`] owns the canonical school collection and the id counter.
//! Two backends exist: in-memory (lost on restart) and RocksDB (durable).
//! Both serialize "take next id, stamp, append" under a single mutex so ids
//! are unique and gapless under concurrent writers.

pub mod memory;
pub mod rocks;

use crate::common::{Result, StorageBackend, StorageConfig};
use crate::school::{School, SchoolDraft};
use std::path::Path;
use std::sync::Arc;

pub use memory::MemStore;
pub use rocks::RocksStore;

/// Trait for school storage backends
pub trait SchoolStore: Send + Sync {
    /// Assign the next id, stamp `created_at` and persist.
    fn insert(&self, draft: SchoolDraft) -> Result<School>;

    /// Every stored school, ascending by id.
    fn list(&self) -> Result<Vec<School>>;

    /// Number of stored schools
    fn count(&self) -> Result<usize>;

    fn kind(&self) -> StorageBackend;
}

/// Shared handle to the configured backend
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn SchoolStore>,
}

impl Storage {
    pub fn new_memory() -> Self {
        Self {
            backend: Arc::new(MemStore::new()),
        }
    }

    pub fn open_rocks(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            backend: Arc::new(RocksStore::open(path)?),
        })
    }

    /// Open whichever backend the configuration selects
    pub fn open(config: &StorageConfig) -> Result<Self> {
        match config.backend {
            StorageBackend::Memory => Ok(Self::new_memory()),
            StorageBackend::RocksDb => Self::open_rocks(&config.path),
        }
    }

    pub fn from_backend(backend: Arc<dyn SchoolStore>) -> Self {
        Self { backend }
    }

    pub fn insert(&self, draft: SchoolDraft) -> Result<School> {
        self.backend.insert(draft)
    }

    pub fn list(&self) -> Result<Vec<School>> {
        self.backend.list()
    }

    pub fn count(&self) -> Result<usize> {
        self.backend.count()
    }

    pub fn kind(&self) -> StorageBackend {
        self.backend.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use tempfile::tempdir;

    fn draft(name: &str) -> SchoolDraft {
        SchoolDraft {
            name: name.to_string(),
            address: "somewhere".to_string(),
            coordinate: Coordinate::new(1.0, 2.0).unwrap(),
        }
    }

    #[test]
    fn test_open_from_config() {
        let memory = Storage::open(&StorageConfig::default()).unwrap();
        assert_eq!(memory.kind(), StorageBackend::Memory);

        let dir = tempdir().unwrap();
        let rocks = Storage::open(&StorageConfig {
            backend: StorageBackend::RocksDb,
            path: dir.path().join("db"),
        })
        .unwrap();
        assert_eq!(rocks.kind(), StorageBackend::RocksDb);

        rocks.insert(draft("a")).unwrap();
        assert_eq!(rocks.count().unwrap(), 1);
    }

    #[test]
    fn test_handles_share_backend() {
        let storage = Storage::new_memory();
        let other = storage.clone();
        storage.insert(draft("a")).unwrap();
        other.insert(draft("b")).unwrap();

        let names: Vec<String> = storage.list().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
