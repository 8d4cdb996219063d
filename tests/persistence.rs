//! Durability test: schools and the id counter survive a restart

use geoschools::geo::Coordinate;
use geoschools::school::RawSchoolPayload;
use geoschools::store::Storage;
use geoschools::SchoolRegistry;
use serde_json::json;
use tempfile::TempDir;

fn payload(name: &str, latitude: f64, longitude: f64) -> RawSchoolPayload {
    serde_json::from_value(json!({
        "name": name,
        "address": format!("{} street", name),
        "latitude": latitude,
        "longitude": longitude,
    }))
    .unwrap()
}

#[test]
fn test_records_survive_restart() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("db");

    {
        let registry = SchoolRegistry::new(Storage::open_rocks(&db_path).unwrap());
        assert_eq!(registry.create(payload("north", 10.0, 10.0)).unwrap().id, 1);
        assert_eq!(registry.create(payload("south", -10.0, 10.0)).unwrap().id, 2);
    }

    // Reopen and continue numbering where we left off
    {
        let registry = SchoolRegistry::new(Storage::open_rocks(&db_path).unwrap());
        assert_eq!(registry.storage().count().unwrap(), 2);

        let third = registry.create(payload("equator", 0.0, 10.0)).unwrap();
        assert_eq!(third.id, 3);

        let origin = Coordinate::new(-9.0, 10.0).unwrap();
        let ranked = registry.list_by_distance(&origin).unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.item.name.as_str()).collect();
        assert_eq!(names, vec!["south", "equator", "north"]);
    }
}

#[test]
fn test_rejected_payload_does_not_consume_id() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("db");

    {
        let registry = SchoolRegistry::new(Storage::open_rocks(&db_path).unwrap());
        assert!(registry.create(payload("bad", 120.0, 0.0)).is_err());
        assert_eq!(registry.create(payload("good", 1.0, 0.0)).unwrap().id, 1);
    }

    {
        let storage = Storage::open_rocks(&db_path).unwrap();
        let schools = storage.list().unwrap();
        assert_eq!(schools.len(), 1);
        assert_eq!(schools[0].name, "good");
    }
}
