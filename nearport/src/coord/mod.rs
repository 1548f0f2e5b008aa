//! Coordinate module
//!
//! Provides the validated [`Coordinate`] type used for both query points and
//! airport locations, and the great-circle distance between two of them.

mod distance;
mod types;

pub use distance::{
    haversine_km, DistanceUnit, UnknownUnitError, EARTH_RADIUS_KM, KM_PER_NAUTICAL_MILE,
    KM_PER_STATUTE_MILE,
};
pub use types::{CoordError, Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

#[cfg(test)]
mod tests;
