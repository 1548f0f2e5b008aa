//! Nearest-airport search.
//!
//! A linear scan over the catalog, computing the great-circle distance from
//! the query to each airport and keeping the smallest. The catalog is small
//! and static, so no spatial index is involved.

use thiserror::Error;

use crate::airport::Airport;
use crate::coord::{haversine_km, Coordinate, DistanceUnit};

/// Distances closer than this (in km) count as equal.
///
/// An airport only replaces the current best when it is closer by more than
/// this amount, so equidistant airports resolve to the first one in catalog
/// order.
pub const DISTANCE_TOLERANCE_KM: f64 = 1e-9;

/// Error type for nearest-airport search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NearestError {
    /// The catalog contains no airports, so no query can be answered.
    #[error("Airport catalog is empty")]
    EmptyCatalog,
}

/// The closest airport to a query and how far away it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryResult<'a> {
    /// Closest airport, borrowed from the catalog.
    pub airport: &'a Airport,
    /// Great-circle distance from the query, in kilometers.
    pub distance_km: f64,
}

impl QueryResult<'_> {
    /// Distance expressed in the given unit.
    pub fn distance_in(&self, unit: DistanceUnit) -> f64 {
        unit.from_km(self.distance_km)
    }
}

/// Find the airport closest to `query`.
///
/// # Arguments
///
/// * `query` - Location to search from
/// * `airports` - Airports to search, in catalog order
///
/// # Errors
///
/// Returns [`NearestError::EmptyCatalog`] if `airports` is empty.
///
/// # Example
///
/// ```
/// use nearport::airport::Airport;
/// use nearport::coord::Coordinate;
/// use nearport::nearest::find_nearest;
///
/// let airports = vec![
///     Airport::new("", "A", Coordinate::new(0.0, 0.0).unwrap()),
///     Airport::new("", "B", Coordinate::new(10.0, 10.0).unwrap()),
/// ];
/// let query = Coordinate::new(9.0, 9.0).unwrap();
///
/// let result = find_nearest(&query, &airports).unwrap();
/// assert_eq!(result.airport.name, "B");
/// ```
pub fn find_nearest<'a>(
    query: &Coordinate,
    airports: &'a [Airport],
) -> Result<QueryResult<'a>, NearestError> {
    let (first, rest) = airports.split_first().ok_or(NearestError::EmptyCatalog)?;

    let mut best = QueryResult {
        airport: first,
        distance_km: haversine_km(query, &first.location),
    };

    for airport in rest {
        let distance_km = haversine_km(query, &airport.location);
        if distance_km < best.distance_km - DISTANCE_TOLERANCE_KM {
            best = QueryResult {
                airport,
                distance_km,
            };
        }
    }

    tracing::trace!(
        query = %query,
        airport = %best.airport.name,
        distance_km = best.distance_km,
        "Nearest airport found"
    );

    Ok(best)
}
