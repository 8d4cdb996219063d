//! School registry: the two operations the service exposes
//!
//! Transport adapters (the HTTP API, tests) talk to this type only; it owns
//! validation, storage and distance ranking.

use crate::common::Result;
use crate::geo::{rank_by_distance, Coordinate};
use crate::school::{parse_query, RankedSchool, RawSchoolPayload, School};
use crate::store::Storage;

#[derive(Clone)]
pub struct SchoolRegistry {
    storage: Storage,
}

impl SchoolRegistry {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Validate a raw payload and store it.
    ///
    /// Missing fields are rejected before field rules are checked.
    pub fn create(&self, payload: RawSchoolPayload) -> Result<School> {
        let draft = payload.into_draft()?;
        let school = self.storage.insert(draft)?;
        tracing::info!(id = school.id, name = %school.name, "school created");
        Ok(school)
    }

    /// Every school, nearest to `origin` first.
    pub fn list_by_distance(&self, origin: &Coordinate) -> Result<Vec<RankedSchool>> {
        let schools = self.storage.list()?;
        Ok(rank_by_distance(origin, schools))
    }

    /// Parse raw query parameters, then rank. The store is not read when the
    /// parameters are invalid.
    pub fn list_by_distance_raw(
        &self,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Vec<RankedSchool>> {
        let origin = parse_query(latitude, longitude)?;
        self.list_by_distance(&origin)
    }
}
