//! Mapping from the INI document to [`ConfigFile`].
//!
//! Unknown sections and keys are ignored. A known key with an unusable value
//! fails the whole load, naming the file it came from.

use ini::{Ini, Properties};
use std::path::{Path, PathBuf};

use super::defaults::MAX_PRECISION;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::coord::DistanceUnit;

/// Build a [`ConfigFile`] from `ini`, starting from defaults.
///
/// `path` is only used to label errors.
pub(super) fn parse_ini(ini: &Ini, path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    let invalid = |section: &str, key: &str, value: &str, reason: String| {
        ConfigFileError::InvalidValue {
            path: path.to_path_buf(),
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason,
        }
    };

    if let Some(catalog) = non_empty(ini.section(Some("catalog")), "path") {
        config.catalog.path = Some(expand_tilde(catalog));
    }

    if let Some(output) = ini.section(Some("output")) {
        if let Some(v) = output.get("unit") {
            config.output.unit = v
                .parse()
                .map_err(|_| invalid("output", "unit", v, unit_reason()))?;
        }
        if let Some(v) = output.get("precision") {
            config.output.precision = parse_precision(v)
                .ok_or_else(|| invalid("output", "precision", v, precision_reason()))?;
        }
    }

    if let Some(file) = non_empty(ini.section(Some("logging")), "file") {
        config.logging.file = expand_tilde(file);
    }

    Ok(config)
}

/// Trimmed value of `key`, treating a blank value like a missing one.
fn non_empty<'a>(section: Option<&'a Properties>, key: &str) -> Option<&'a str> {
    section
        .and_then(|s| s.get(key))
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Parse a decimal-places value, accepting 0 through `MAX_PRECISION`.
pub(super) fn parse_precision(value: &str) -> Option<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|p| *p <= MAX_PRECISION)
}

pub(super) fn precision_reason() -> String {
    format!("must be an integer from 0 to {}", MAX_PRECISION)
}

pub(super) fn unit_reason() -> String {
    let names: Vec<&str> = DistanceUnit::ALL.iter().map(|u| u.suffix()).collect();
    format!("must be one of: {}", names.join(", "))
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
