//! Reading and writing `~/.nearport/config.ini`.
//!
//! A missing file is not an error: every setting falls back to its default.
//! Every error names the file it concerns so the CLI can point the user at it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::parser::parse_ini;
use super::settings::ConfigFile;
use super::writer::to_config_string;

/// Directory under the home directory that holds nearport's files.
pub const CONFIG_DIR_NAME: &str = ".nearport";

/// Configuration file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid setting in {}: {section}.{key} = '{value}' ({reason})", .path.display())]
    InvalidValue {
        path: PathBuf,
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigFile {
    /// Load `~/.nearport/config.ini`, or defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load the configuration stored at `path`, or defaults when there is
    /// no file there.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        match Ini::load_from_file(path) {
            Ok(ini) => parse_ini(&ini, path),
            Err(ini::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigFileError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Write the configuration to `~/.nearport/config.ini`.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Write the configuration to `path`, creating missing parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        let write_failed = |source: io::Error| ConfigFileError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
        fs::write(path, to_config_string(self)).map_err(write_failed)
    }

    /// Write a default configuration to `path` unless a file is already there.
    ///
    /// Returns `true` if the file was created, `false` if it already existed.
    /// An existing file is left untouched.
    pub fn create_if_missing(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }
}

/// `~/.nearport`, or `./.nearport` when the home directory is unknown.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// `~/.nearport/config.ini`
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::CatalogSource;
    use crate::config::defaults::*;
    use crate::coord::DistanceUnit;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert_eq!(config.catalog_source(), CatalogSource::Bundled);
        assert_eq!(config.output.unit, DistanceUnit::Kilometers);
        assert_eq!(config.output.precision, DEFAULT_PRECISION);
        assert!(config.logging.file.ends_with(DEFAULT_LOG_FILE_NAME));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let config = ConfigFile::load_from(&temp_dir.path().join("absent.ini")).unwrap();

        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_unreadable_path_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();

        // A directory exists but cannot be read as a file.
        let result = ConfigFile::load_from(temp_dir.path());

        match result {
            Err(ConfigFileError::Read { path, .. }) => assert_eq!(path, temp_dir.path()),
            other => panic!("expected a read error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_value_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        fs::write(&config_path, "[output]\nprecision = lots\n").unwrap();

        let err = ConfigFile::load_from(&config_path).unwrap_err();

        match &err {
            ConfigFileError::InvalidValue { path, key, value, .. } => {
                assert_eq!(path, &config_path);
                assert_eq!(key, "precision");
                assert_eq!(value, "lots");
            }
            other => panic!("expected an invalid value error, got {:?}", other),
        }
        assert!(err.to_string().contains(&config_path.display().to_string()));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        ConfigFile::default().save_to(&config_path).unwrap();

        assert!(config_path.exists());
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.catalog.path = Some(temp_dir.path().join("Developer Test.csv"));
        config.output.unit = DistanceUnit::NauticalMiles;
        config.output.precision = 2;
        config.logging.file = temp_dir.path().join("logs").join("nearport.log");
        config.save_to(&config_path).unwrap();

        assert_eq!(ConfigFile::load_from(&config_path).unwrap(), config);
    }

    #[test]
    fn test_create_if_missing_reports_creation_once() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);

        assert!(ConfigFile::create_if_missing(&config_path).unwrap());
        assert!(config_path.exists());
        assert!(!ConfigFile::create_if_missing(&config_path).unwrap());
    }

    #[test]
    fn test_create_if_missing_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        fs::write(&config_path, "[output]\nunit = mi\n").unwrap();

        assert!(!ConfigFile::create_if_missing(&config_path).unwrap());

        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, "[output]\nunit = mi\n");
    }

    #[test]
    fn test_config_paths() {
        assert!(config_file_path().ends_with(".nearport/config.ini"));
        assert_eq!(config_file_path().parent(), Some(config_directory().as_path()));
    }
}
