//! Great-circle distance on a spherical Earth (haversine formula)

use std::f64::consts::PI;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Half the Earth's circumference; no two points are further apart.
pub const MAX_DISTANCE_KM: f64 = PI * EARTH_RADIUS_KM;

/// Distance in kilometres between two points given in decimal degrees.
///
/// Inputs are expected inside the valid latitude/longitude ranges. The result
/// is symmetric, zero for identical points and within `[0, MAX_DISTANCE_KM]`.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1 * PI / 180.0;
    let phi2 = lat2 * PI / 180.0;
    let d_phi = (lat2 - lat1) * PI / 180.0;
    let d_lambda = (lon2 - lon1) * PI / 180.0;

    let sin_d_phi = (d_phi / 2.0).sin();
    let sin_d_lambda = (d_lambda / 2.0).sin();

    // Rounding can push `a` a hair outside [0, 1] for antipodal points.
    let a = (sin_d_phi * sin_d_phi + phi1.cos() * phi2.cos() * sin_d_lambda * sin_d_lambda)
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
