//! Geospatial primitives: validated coordinates, great-circle distance and
//! distance ranking.

pub mod coordinate;
pub mod distance;
pub mod ranking;

pub use coordinate::{Coordinate, CoordinateError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
pub use distance::{haversine_km, EARTH_RADIUS_KM, MAX_DISTANCE_KM};
pub use ranking::{rank_by_distance, Located, Ranked};
