//! Validation of loosely-typed client input
//!
//! Clients send fields as JSON strings, JSON numbers or form strings. A
//! [`RawSchoolPayload`] holds them untouched; [`RawSchoolPayload::validate`]
//! turns it into a [`SchoolDraft`] or the full list of broken rules.

use super::SchoolDraft;
use crate::common::{Error, Result};
use crate::geo::coordinate::{is_valid_latitude, is_valid_longitude};
use crate::geo::Coordinate;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

pub const NAME_ERROR: &str = "Name is required and must be a non-empty string";
pub const ADDRESS_ERROR: &str = "Address is required and must be a non-empty string";
pub const LATITUDE_NUMBER_ERROR: &str = "Latitude is required and must be a valid number";
pub const LATITUDE_RANGE_ERROR: &str = "Latitude must be between -90 and 90 degrees";
pub const LONGITUDE_NUMBER_ERROR: &str = "Longitude is required and must be a valid number";
pub const LONGITUDE_RANGE_ERROR: &str = "Longitude must be between -180 and 180 degrees";

pub const INVALID_QUERY_MESSAGE: &str = "Valid latitude and longitude parameters are required";
pub const QUERY_RANGE_MESSAGE: &str =
    "Latitude must be between -90 and 90, and longitude must be between -180 and 180";

/// Create request exactly as the client sent it.
///
/// JSON `null` and an absent key both end up as `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSchoolPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub address: Option<Value>,
    #[serde(default)]
    pub latitude: Option<Value>,
    #[serde(default)]
    pub longitude: Option<Value>,
}

impl RawSchoolPayload {
    /// Build from URL-encoded or multipart form fields (always strings)
    pub fn from_form(mut fields: HashMap<String, String>) -> Self {
        let mut take = |key: &str| fields.remove(key).map(Value::String);
        Self {
            name: take("name"),
            address: take("address"),
            latitude: take("latitude"),
            longitude: take("longitude"),
        }
    }

    /// True when any of the four fields is absent, null or an empty string.
    ///
    /// Numeric zero counts as present.
    pub fn has_missing_fields(&self) -> bool {
        [&self.name, &self.address, &self.latitude, &self.longitude]
            .into_iter()
            .any(|field| is_missing(field.as_ref()))
    }

    /// Check every field rule and collect all failures in field order.
    pub fn validate(&self) -> std::result::Result<SchoolDraft, Vec<String>> {
        let mut errors = Vec::new();

        let name = non_empty_text(self.name.as_ref());
        if name.is_none() {
            errors.push(NAME_ERROR.to_string());
        }

        let address = non_empty_text(self.address.as_ref());
        if address.is_none() {
            errors.push(ADDRESS_ERROR.to_string());
        }

        let latitude = match self.latitude.as_ref().and_then(parse_number) {
            None => {
                errors.push(LATITUDE_NUMBER_ERROR.to_string());
                None
            }
            Some(lat) if !is_valid_latitude(lat) => {
                errors.push(LATITUDE_RANGE_ERROR.to_string());
                None
            }
            Some(lat) => Some(lat),
        };

        let longitude = match self.longitude.as_ref().and_then(parse_number) {
            None => {
                errors.push(LONGITUDE_NUMBER_ERROR.to_string());
                None
            }
            Some(lon) if !is_valid_longitude(lon) => {
                errors.push(LONGITUDE_RANGE_ERROR.to_string());
                None
            }
            Some(lon) => Some(lon),
        };

        match (name, address, latitude, longitude) {
            (Some(name), Some(address), Some(lat), Some(lon)) if errors.is_empty() => {
                let coordinate = Coordinate::new(lat, lon).map_err(|e| vec![e.to_string()])?;
                Ok(SchoolDraft {
                    name,
                    address,
                    coordinate,
                })
            }
            _ => Err(errors),
        }
    }

    /// Presence check followed by field validation, as one step.
    pub fn into_draft(self) -> Result<SchoolDraft> {
        if self.has_missing_fields() {
            return Err(Error::MissingFields);
        }
        self.validate().map_err(Error::Validation)
    }
}

/// Parse the list query's coordinate parameters.
///
/// Unparseable or absent values are reported before range problems.
pub fn parse_query(latitude: Option<&str>, longitude: Option<&str>) -> Result<Coordinate> {
    let (Some(lat), Some(lon)) = (
        latitude.and_then(parse_number_str),
        longitude.and_then(parse_number_str),
    ) else {
        return Err(Error::InvalidQuery(INVALID_QUERY_MESSAGE.to_string()));
    };

    Coordinate::new(lat, lon).map_err(|_| Error::InvalidQuery(QUERY_RANGE_MESSAGE.to_string()))
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// A finite number, from a JSON number or a numeric string.
fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number_str(s),
        _ => None,
    }
}

fn parse_number_str(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> RawSchoolPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_payload_with_strings() {
        let draft = payload(json!({
            "name": "  Hillside Primary ",
            "address": "4 Hill St",
            "latitude": "12.34",
            "longitude": "98.76"
        }))
        .validate()
        .unwrap();

        assert_eq!(draft.name, "Hillside Primary");
        assert_eq!(draft.address, "4 Hill St");
        assert_eq!(draft.coordinate.latitude(), 12.34);
        assert_eq!(draft.coordinate.longitude(), 98.76);
    }

    #[test]
    fn test_valid_payload_with_numbers() {
        let draft = payload(json!({
            "name": "North",
            "address": "Pole",
            "latitude": 90,
            "longitude": -180.0
        }))
        .validate()
        .unwrap();
        assert_eq!(draft.coordinate.latitude(), 90.0);
        assert_eq!(draft.coordinate.longitude(), -180.0);
    }

    #[test]
    fn test_zero_coordinates_are_present_and_valid() {
        for (lat, lon) in [(json!(0), json!(0)), (json!("0"), json!("0")), (json!(0.0), json!("0.0"))] {
            let raw = payload(json!({
                "name": "Null Island School",
                "address": "Gulf of Guinea",
                "latitude": lat,
                "longitude": lon
            }));
            assert!(!raw.has_missing_fields());
            let draft = raw.into_draft().unwrap();
            assert_eq!(draft.coordinate.latitude(), 0.0);
            assert_eq!(draft.coordinate.longitude(), 0.0);
        }
    }

    #[test]
    fn test_missing_fields() {
        let raw = payload(json!({ "address": "x", "latitude": 1, "longitude": 2 }));
        assert!(raw.has_missing_fields());
        assert!(matches!(raw.into_draft(), Err(Error::MissingFields)));

        let raw = payload(json!({ "name": "", "address": "x", "latitude": 1, "longitude": 2 }));
        assert!(raw.has_missing_fields());

        let raw = payload(json!({ "name": "a", "address": "x", "latitude": null, "longitude": 2 }));
        assert!(raw.has_missing_fields());
    }

    #[test]
    fn test_latitude_out_of_range() {
        let errors = payload(json!({
            "name": "a", "address": "b", "latitude": "95", "longitude": "10"
        }))
        .validate()
        .unwrap_err();
        assert_eq!(errors, vec![LATITUDE_RANGE_ERROR.to_string()]);
    }

    #[test]
    fn test_non_numeric_latitude_reports_only_number_error() {
        let errors = payload(json!({
            "name": "a", "address": "b", "latitude": "abc", "longitude": "10"
        }))
        .validate()
        .unwrap_err();
        assert_eq!(errors, vec![LATITUDE_NUMBER_ERROR.to_string()]);
    }

    #[test]
    fn test_collects_every_error_in_order() {
        let errors = payload(json!({
            "name": "   ",
            "address": 42,
            "latitude": "north",
            "longitude": 200
        }))
        .validate()
        .unwrap_err();
        assert_eq!(
            errors,
            vec![
                NAME_ERROR.to_string(),
                ADDRESS_ERROR.to_string(),
                LATITUDE_NUMBER_ERROR.to_string(),
                LONGITUDE_RANGE_ERROR.to_string(),
            ]
        );
    }

    #[test]
    fn test_non_finite_strings_rejected() {
        for bad in ["NaN", "inf", "-infinity", "1e400"] {
            let errors = payload(json!({
                "name": "a", "address": "b", "latitude": "1", "longitude": bad
            }))
            .validate()
            .unwrap_err();
            assert_eq!(errors, vec![LONGITUDE_NUMBER_ERROR.to_string()], "input {}", bad);
        }
    }

    #[test]
    fn test_from_form() {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Form School".to_string());
        fields.insert("address".to_string(), "1 Form Way".to_string());
        fields.insert("latitude".to_string(), "-33.86".to_string());
        fields.insert("longitude".to_string(), "151.2".to_string());

        let draft = RawSchoolPayload::from_form(fields).into_draft().unwrap();
        assert_eq!(draft.name, "Form School");
        assert_eq!(draft.coordinate.latitude(), -33.86);
    }

    #[test]
    fn test_parse_query() {
        let coord = parse_query(Some("12.345678"), Some("98.765432")).unwrap();
        assert_eq!(coord.latitude(), 12.345678);

        let coord = parse_query(Some("0"), Some("0")).unwrap();
        assert_eq!(coord.longitude(), 0.0);

        for (lat, lon) in [(None, Some("1")), (Some("1"), None), (Some("abc"), Some("1")), (Some(""), Some("1"))] {
            match parse_query(lat, lon) {
                Err(Error::InvalidQuery(msg)) => assert_eq!(msg, INVALID_QUERY_MESSAGE),
                other => panic!("unexpected {:?}", other),
            }
        }

        match parse_query(Some("91"), Some("0")) {
            Err(Error::InvalidQuery(msg)) => assert_eq!(msg, QUERY_RANGE_MESSAGE),
            other => panic!("unexpected {:?}", other),
        }
        match parse_query(Some("0"), Some("-181")) {
            Err(Error::InvalidQuery(msg)) => assert_eq!(msg, QUERY_RANGE_MESSAGE),
            other => panic!("unexpected {:?}", other),
        }
    }
}
