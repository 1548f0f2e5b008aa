//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and catalog loading
//! so command handlers start from the same state.

use std::path::Path;

use nearport::airport::{AirportCatalog, CatalogSource, LoadReport};
use nearport::config::{ConfigFile, DEFAULT_LOG_FILE_NAME};
use nearport::logging::{init_logging, LoggingGuard};
use tracing::{info, warn};

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `verbose` - Mirror log events to stderr at debug level
    pub fn new(verbose: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());

        let logging_guard = init_logging(&log_dir, &log_file, verbose, verbose)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("nearport v{}", nearport::VERSION);
        info!("nearport CLI: {} command", command);
    }

    /// Catalog source for this run: the override if given, else the config.
    pub fn catalog_source(&self, path: Option<&Path>) -> CatalogSource {
        match path {
            Some(path) => CatalogSource::File(path.to_path_buf()),
            None => self.config.catalog_source(),
        }
    }

    /// Load airport data and its report, without judging the result.
    pub fn load_catalog_report(
        &self,
        source: &CatalogSource,
    ) -> Result<(AirportCatalog, LoadReport), CliError> {
        info!(source = %source, "Loading airport catalog");

        AirportCatalog::load(source).map_err(|error| CliError::CatalogLoad {
            source: source.clone(),
            error,
        })
    }

    /// Load airport data for lookups.
    ///
    /// A catalog without a single usable airport is an error.
    pub fn load_catalog(&self, path: Option<&Path>) -> Result<AirportCatalog, CliError> {
        let source = self.catalog_source(path);
        let (catalog, report) = self.load_catalog_report(&source)?;

        if !report.is_clean() {
            warn!(
                skipped = report.skipped.len(),
                "Some airport records were skipped"
            );
        }

        if catalog.is_empty() {
            return Err(CliError::EmptyCatalog { source });
        }

        Ok(catalog)
    }
}
