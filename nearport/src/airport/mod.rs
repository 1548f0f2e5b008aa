//! Airport catalog.
//!
//! This module provides the read-only list of airports that nearest-airport
//! queries run against.
//!
//! # Data Source
//!
//! Airport data is read from a CSV file with a header row. The expected
//! layout is:
//!
//! ```text
//! NAME,ICAO,Latitude,Longitude
//! Toulouse-Blagnac,LFBO,43.6291,1.3638
//! ```
//!
//! `NAME`, `Latitude` and `Longitude` are required, `ICAO` is optional and
//! extra columns are ignored. A dataset of major airports is compiled into the
//! library and available through [`AirportCatalog::bundled`].
//!
//! # Example
//!
//! ```
//! use nearport::airport::AirportCatalog;
//! use nearport::coord::Coordinate;
//!
//! let catalog = AirportCatalog::bundled()?;
//! let query = Coordinate::new(43.6, 1.4)?;
//! let result = catalog.nearest(&query)?;
//! assert_eq!(result.airport.icao, "LFBO");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod catalog;
mod parser;

pub use catalog::{AirportCatalog, CatalogError, CatalogSource};
pub use parser::{CsvCatalogParser, LoadReport, MalformedRecord, ParseError, REQUIRED_COLUMNS};

use crate::coord::Coordinate;

/// An airport with a name, an optional code and a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// ICAO code (e.g., "LFBO", "KJFK"). Empty when the source has none.
    pub icao: String,
    /// Airport name.
    pub name: String,
    /// Airport reference point.
    pub location: Coordinate,
}

impl Airport {
    /// Create a new airport.
    pub fn new(icao: &str, name: &str, location: Coordinate) -> Self {
        Self {
            icao: icao.to_string(),
            name: name.to_string(),
            location,
        }
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.location.longitude()
    }
}
