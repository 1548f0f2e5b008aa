//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;
use crate::coord::DistanceUnit;

/// Default unit for reported distances.
pub const DEFAULT_UNIT: DistanceUnit = DistanceUnit::Kilometers;

/// Default number of decimal places for reported distances.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest accepted `output.precision`.
pub const MAX_PRECISION: usize = 12;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "nearport.log";

/// Default log file path (~/.nearport/nearport.log).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE_NAME)
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings::default(),
            output: OutputSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
