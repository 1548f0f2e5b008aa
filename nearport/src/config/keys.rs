//! `section.key` access to every setting in [`ConfigFile`].
//!
//! `nearport config get` and `nearport config set` go through [`ConfigKey`].
//! A value is converted to its typed form before it is stored, so a rejected
//! value leaves the configuration as it was.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use super::parser::{expand_tilde, parse_precision, precision_reason, unit_reason};
use super::settings::ConfigFile;
use super::writer::path_to_string;
use crate::coord::DistanceUnit;

#[derive(Debug, Error)]
pub enum ConfigKeyError {
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// A user-editable setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    CatalogPath,
    OutputUnit,
    OutputPrecision,
    LoggingFile,
}

const ALL_KEYS: [ConfigKey; 4] = [
    ConfigKey::CatalogPath,
    ConfigKey::OutputUnit,
    ConfigKey::OutputPrecision,
    ConfigKey::LoggingFile,
];

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    /// Key names are matched ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KEYS
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Every key, with keys of the same section next to each other.
    pub fn all() -> &'static [ConfigKey] {
        &ALL_KEYS
    }

    /// Dotted name, e.g. `output.unit`.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::CatalogPath => "catalog.path",
            ConfigKey::OutputUnit => "output.unit",
            ConfigKey::OutputPrecision => "output.precision",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// INI section holding this key ("output" for `output.unit`).
    pub fn section(&self) -> &'static str {
        self.parts().0
    }

    /// Key within its section ("unit" for `output.unit`).
    pub fn key_name(&self) -> &'static str {
        self.parts().1
    }

    fn parts(&self) -> (&'static str, &'static str) {
        self.name().split_once('.').unwrap_or(("", self.name()))
    }

    /// Current value as it would be written to the INI file.
    ///
    /// An unset catalog path is the empty string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::CatalogPath => config
                .catalog
                .path
                .as_deref()
                .map(path_to_string)
                .unwrap_or_default(),
            ConfigKey::OutputUnit => config.output.unit.to_string(),
            ConfigKey::OutputPrecision => config.output.precision.to_string(),
            ConfigKey::LoggingFile => path_to_string(&config.logging.file),
        }
    }

    /// Store `value` in `config`.
    ///
    /// Surrounding whitespace is ignored. An empty `catalog.path` switches
    /// back to the bundled airports.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let value = value.trim();
        match self {
            ConfigKey::CatalogPath => {
                config.catalog.path = (!value.is_empty()).then(|| expand_tilde(value));
            }
            ConfigKey::OutputUnit => {
                config.output.unit = value
                    .parse::<DistanceUnit>()
                    .map_err(|_| self.rejected(unit_reason()))?;
            }
            ConfigKey::OutputPrecision => {
                config.output.precision =
                    parse_precision(value).ok_or_else(|| self.rejected(precision_reason()))?;
            }
            ConfigKey::LoggingFile => {
                config.logging.file = self.required_path(value)?;
            }
        }
        Ok(())
    }

    /// Check `value` without storing it anywhere.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.set(&mut ConfigFile::default(), value)
    }

    fn required_path(&self, value: &str) -> Result<PathBuf, ConfigKeyError> {
        if value.is_empty() {
            return Err(self.rejected("must be a valid path".to_string()));
        }
        Ok(expand_tilde(value))
    }

    fn rejected(&self, reason: String) -> ConfigKeyError {
        ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason,
        }
    }
}
