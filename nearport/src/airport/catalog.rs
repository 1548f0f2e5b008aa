//! Ordered, read-only airport catalog.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::parser::{CsvCatalogParser, LoadReport, ParseError};
use super::Airport;
use crate::coord::Coordinate;
use crate::nearest::{find_nearest, NearestError, QueryResult};

/// Dataset compiled into the library.
const BUNDLED_AIRPORTS_CSV: &str = include_str!("../../data/airports.csv");

/// Error type for catalog loading.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Airport data not found at: {0}")]
    NotFound(PathBuf),
    #[error("Failed to parse airport data: {0}")]
    ParseError(#[from] ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where catalog data comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// The dataset shipped inside the library.
    #[default]
    Bundled,
    /// A CSV file on disk.
    File(PathBuf),
}

impl CatalogSource {
    /// Source for an optional configured path; `None` means bundled data.
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map(CatalogSource::File).unwrap_or_default()
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => f.write_str("bundled airport data"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read-only list of airports in source order.
///
/// Built once at startup and passed to whoever needs it; nothing mutates it
/// afterwards, so a shared reference can be queried from any thread.
#[derive(Debug, Clone, Default)]
pub struct AirportCatalog {
    airports: Vec<Airport>,
}

impl AirportCatalog {
    /// Build a catalog from airports already in memory, keeping their order.
    pub fn from_airports(airports: Vec<Airport>) -> Self {
        Self { airports }
    }

    /// Load the catalog from the given source.
    pub fn load(source: &CatalogSource) -> Result<(Self, LoadReport), CatalogError> {
        match source {
            CatalogSource::Bundled => Self::load_bundled(),
            CatalogSource::File(path) => Self::load_from_path(path),
        }
    }

    /// Load the dataset compiled into the library.
    pub fn load_bundled() -> Result<(Self, LoadReport), CatalogError> {
        tracing::debug!("Loading bundled airport data");
        Self::load_from_reader(BUNDLED_AIRPORTS_CSV.as_bytes())
    }

    /// Load a CSV file from disk.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<(Self, LoadReport), CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), "Loading airport CSV");
        let file = File::open(path)?;
        Self::load_from_reader(BufReader::new(file))
    }

    /// Load CSV data from a reader.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<(Self, LoadReport), CatalogError> {
        let (airports, report) = CsvCatalogParser::parse(reader)?;

        tracing::info!(
            count = airports.len(),
            skipped = report.skipped.len(),
            "Built airport catalog"
        );

        Ok((Self { airports }, report))
    }

    /// The bundled dataset, discarding the load report.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::load_bundled().map(|(catalog, _)| catalog)
    }

    /// Find the airport closest to `query`.
    ///
    /// Fails with [`NearestError::EmptyCatalog`] when the catalog has no
    /// airports.
    pub fn nearest(&self, query: &Coordinate) -> Result<QueryResult<'_>, NearestError> {
        find_nearest(query, &self.airports)
    }

    /// Get an airport by code, case-insensitive.
    ///
    /// Returns the first match in catalog order.
    pub fn get(&self, icao: &str) -> Option<&Airport> {
        self.airports
            .iter()
            .find(|a| !a.icao.is_empty() && a.icao.eq_ignore_ascii_case(icao))
    }

    /// All airports in catalog order.
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Returns the number of airports in the catalog.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Returns an iterator over all airports in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }
}
