//! Coordinate type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Valid latitude range (degrees)
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range (degrees)
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A point on the globe in decimal degrees.
///
/// Always finite and inside the valid ranges; the only way to build one is
/// through [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

/// Why a latitude/longitude pair was refused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    LatitudeNotFinite,
    LongitudeNotFinite,
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::LatitudeNotFinite => write!(f, "latitude is not a finite number"),
            CoordinateError::LongitudeNotFinite => write!(f, "longitude is not a finite number"),
            CoordinateError::LatitudeOutOfRange(v) => {
                write!(f, "latitude {} outside [{}, {}]", v, MIN_LAT, MAX_LAT)
            }
            CoordinateError::LongitudeOutOfRange(v) => {
                write!(f, "longitude {} outside [{}, {}]", v, MIN_LON, MAX_LON)
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() {
            return Err(CoordinateError::LatitudeNotFinite);
        }
        if !longitude.is_finite() {
            return Err(CoordinateError::LongitudeNotFinite);
        }
        if !is_valid_latitude(latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !is_valid_longitude(longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in kilometres.
    #[inline]
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        super::haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        Coordinate::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[inline]
pub fn is_valid_latitude(latitude: f64) -> bool {
    (MIN_LAT..=MAX_LAT).contains(&latitude)
}

#[inline]
pub fn is_valid_longitude(longitude: f64) -> bool {
    (MIN_LON..=MAX_LON).contains(&longitude)
}
