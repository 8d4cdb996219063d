//! Ordering records by distance from a query point

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Anything with a position on the globe.
pub trait Located {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
}

/// A record annotated with its distance (km) from one query point.
///
/// Serializes as the record's own fields plus `distance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    #[serde(flatten)]
    pub item: T,
    pub distance: f64,
}

/// Annotate every item with its distance from `origin` and sort ascending.
///
/// The sort is stable: items at equal distance keep their input order. Every
/// input item appears exactly once in the output.
pub fn rank_by_distance<T, I>(origin: &Coordinate, items: I) -> Vec<Ranked<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .map(|item| {
            let distance = super::haversine_km(
                origin.latitude(),
                origin.longitude(),
                item.latitude(),
                item.longitude(),
            );
            Ranked { item, distance }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
