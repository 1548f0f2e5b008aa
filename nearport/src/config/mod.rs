//! User configuration for nearport.
//!
//! Settings live in `~/.nearport/config.ini` and are split by concern:
//!
//! - [`settings`]: plain data structs, one per INI section
//! - [`defaults`]: default values and limits
//! - `file`: loading and saving
//! - `keys`: `section.key` access with validation, used by `nearport config`
//!
//! # Example
//!
//! ```
//! use nearport::config::{ConfigFile, ConfigKey};
//! use nearport::coord::DistanceUnit;
//!
//! let mut config = ConfigFile::default();
//! let key: ConfigKey = "output.unit".parse().unwrap();
//! key.set(&mut config, "nm").unwrap();
//!
//! assert_eq!(config.output.unit, DistanceUnit::NauticalMiles);
//! assert_eq!(key.get(&config), "nm");
//! ```

pub mod defaults;
mod file;
mod keys;
mod parser;
pub mod settings;
mod writer;

pub use defaults::{
    default_log_file, DEFAULT_LOG_FILE_NAME, DEFAULT_PRECISION, DEFAULT_UNIT, MAX_PRECISION,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{CatalogSettings, ConfigFile, LoggingSettings, OutputSettings};
