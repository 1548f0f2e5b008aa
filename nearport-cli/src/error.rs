//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use nearport::airport::{CatalogError, CatalogSource};
use nearport::config::ConfigFileError;
use nearport::nearest::NearestError;
use nearport::query::QueryError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Airport data could not be loaded
    CatalogLoad {
        source: CatalogSource,
        error: CatalogError,
    },
    /// Airport data loaded but contained no usable airports
    EmptyCatalog { source: CatalogSource },
    /// Coordinates given on the command line were rejected
    Query(QueryError),
    /// Lookup failed
    Nearest(NearestError),
    /// Interactive prompt failed
    Prompt(String),
    /// Failed to write results
    Output(std::io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::CatalogLoad { error, .. } => {
                eprintln!();
                eprintln!("Cause: {}", error);
                eprintln!("Set a different file with: nearport config set catalog.path <file>");
            }
            CliError::EmptyCatalog { .. } => {
                eprintln!();
                eprintln!("The file has no valid airport rows.");
                eprintln!("Run 'nearport catalog check' to see which rows were rejected.");
            }
            CliError::Query(_) => {
                eprintln!();
                eprintln!("Latitude must be within -90..90 and longitude within -180..180,");
                eprintln!("both in decimal degrees (e.g. --lat=43.6 --lon=1.4).");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::CatalogLoad { source, .. } | CliError::EmptyCatalog { source } => write!(
                f,
                "Failed to load list of airports. Please check `{}` exists and try again.",
                source
            ),
            CliError::Query(e) => write!(f, "{}", e),
            CliError::Nearest(e) => write!(f, "Lookup failed: {}", e),
            CliError::Prompt(msg) => write!(f, "Prompt error: {}", msg),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::CatalogLoad { error, .. } => Some(error),
            CliError::Query(e) => Some(e),
            CliError::Nearest(e) => Some(e),
            CliError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        CliError::Query(e)
    }
}

impl From<NearestError> for CliError {
    fn from(e: NearestError) -> Self {
        CliError::Nearest(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Output(e)
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::Prompt(e.to_string())
    }
}
