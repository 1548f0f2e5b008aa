//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::airport::CatalogSource;
use crate::coord::DistanceUnit;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Airport data settings
    pub catalog: CatalogSettings,
    /// Result presentation settings
    pub output: OutputSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Catalog source selected by this configuration.
    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::from_option(self.catalog.path.clone())
    }
}

/// Airport data configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogSettings {
    /// CSV file to load. `None` uses the bundled dataset.
    pub path: Option<PathBuf>,
}

/// Result presentation configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    /// Unit distances are shown in
    pub unit: DistanceUnit,
    /// Decimal places shown for distances
    pub precision: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
