//! School record types

use crate::geo::{Coordinate, Located, Ranked};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored school. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    /// Assigned by the store, starting at 1
    pub id: u64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

/// A school annotated with its distance from one query point
pub type RankedSchool = Ranked<School>;

/// A validated school that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolDraft {
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
}

impl School {
    pub fn from_draft(id: u64, draft: SchoolDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            address: draft.address,
            latitude: draft.coordinate.latitude(),
            longitude: draft.coordinate.longitude(),
            created_at,
        }
    }
}

impl Located for School {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_school_serializes_flat() {
        let created_at = "2024-05-01T10:00:00Z".parse().unwrap();
        let school = School::from_draft(
            7,
            SchoolDraft {
                name: "Riverside High".into(),
                address: "1 River Rd".into(),
                coordinate: Coordinate::new(12.34, 98.76).unwrap(),
            },
            created_at,
        );
        let ranked = RankedSchool {
            item: school.clone(),
            distance: 1.5,
        };

        let value = serde_json::to_value(&ranked).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Riverside High");
        assert_eq!(value["latitude"], 12.34);
        assert_eq!(value["distance"], 1.5);
        assert_eq!(value["created_at"], "2024-05-01T10:00:00Z");

        let back: RankedSchool = serde_json::from_value(value).unwrap();
        assert_eq!(back.item, school);
    }
}
