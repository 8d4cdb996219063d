//! In-memory store (default). Contents are discarded on restart.

use super::SchoolStore;
use crate::common::{Result, StorageBackend};
use crate::school::{School, SchoolDraft};
use chrono::Utc;
use std::sync::Mutex;

struct Inner {
    next_id: u64,
    schools: Vec<School>,
}

pub struct MemStore {
    inner: Mutex<Inner>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                schools: Vec::new(),
            }),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SchoolStore for MemStore {
    fn insert(&self, draft: SchoolDraft) -> Result<School> {
        let mut inner = self.inner.lock()?;
        let id = inner.next_id;
        let school = School::from_draft(id, draft, Utc::now());
        inner.schools.push(school.clone());
        inner.next_id = id + 1;
        Ok(school)
    }

    fn list(&self) -> Result<Vec<School>> {
        Ok(self.inner.lock()?.schools.clone())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.inner.lock()?.schools.len())
    }

    fn kind(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}
