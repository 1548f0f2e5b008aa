//! Nearport - nearest airport lookup
//!
//! This library loads a static list of airports from CSV and finds the one
//! closest to a latitude/longitude by great-circle distance.
//!
//! # Example
//!
//! ```
//! use nearport::airport::AirportCatalog;
//! use nearport::query::parse_coordinate;
//!
//! let catalog = AirportCatalog::bundled().unwrap();
//! let query = parse_coordinate("51.5", "-0.12").unwrap();
//!
//! let result = catalog.nearest(&query).unwrap();
//! assert_eq!(result.airport.icao, "EGLL");
//! ```

pub mod airport;
pub mod config;
pub mod coord;
pub mod logging;
pub mod nearest;
pub mod query;

/// Version of the nearport library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
