//! Great-circle distance and distance units.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per international nautical mile.
pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Kilometers per statute mile.
pub const KM_PER_STATUTE_MILE: f64 = 1.609344;

/// Calculate the great-circle distance between two coordinates.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]:
///
/// ```text
/// a = sin²(Δφ/2) + cos φ1 ⋅ cos φ2 ⋅ sin²(Δλ/2)
/// c = 2 ⋅ atan2(√a, √(1−a))
/// d = R ⋅ c
/// ```
///
/// # Returns
///
/// Distance in kilometers.
///
/// # Example
///
/// ```
/// use nearport::coord::{haversine_km, Coordinate};
///
/// let equator = Coordinate::new(0.0, 0.0).unwrap();
/// let one_north = Coordinate::new(1.0, 0.0).unwrap();
/// let dist = haversine_km(&equator, &one_north);
/// assert!((dist - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1_rad = from.latitude().to_radians();
    let lat2_rad = to.latitude().to_radians();
    let delta_lat = (to.latitude() - from.latitude()).to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair above 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Unit used when presenting a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    /// Kilometers
    #[default]
    Kilometers,
    /// International nautical miles
    NauticalMiles,
    /// Statute miles
    StatuteMiles,
}

impl DistanceUnit {
    /// All supported units, in display order.
    pub const ALL: [DistanceUnit; 3] = [
        DistanceUnit::Kilometers,
        DistanceUnit::NauticalMiles,
        DistanceUnit::StatuteMiles,
    ];

    /// Convert a distance in kilometers to this unit.
    #[inline]
    pub fn from_km(self, km: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => km,
            DistanceUnit::NauticalMiles => km / KM_PER_NAUTICAL_MILE,
            DistanceUnit::StatuteMiles => km / KM_PER_STATUTE_MILE,
        }
    }

    /// Short suffix printed after a distance value.
    pub fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::NauticalMiles => "nm",
            DistanceUnit::StatuteMiles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Error returned when a unit name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown distance unit '{0}' (expected km, nm or mi)")]
pub struct UnknownUnitError(pub String);

impl FromStr for DistanceUnit {
    type Err = UnknownUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km" | "kilometers" | "kilometres" => Ok(DistanceUnit::Kilometers),
            "nm" | "nautical" | "nautical-miles" => Ok(DistanceUnit::NauticalMiles),
            "mi" | "miles" | "statute-miles" => Ok(DistanceUnit::StatuteMiles),
            other => Err(UnknownUnitError(other.to_string())),
        }
    }
}
