//! Parsing of user-entered query coordinates.
//!
//! Front ends collect latitude and longitude as text; this module turns that
//! text into a validated [`Coordinate`] or an error the front end can show
//! before asking again.

use std::fmt;

use thiserror::Error;

use crate::coord::{CoordError, Coordinate};

/// Which half of a coordinate a piece of input was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Latitude => f.write_str("latitude"),
            Field::Longitude => f.write_str("longitude"),
        }
    }
}

/// Errors from interpreting user input as a coordinate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The text is not a decimal number.
    #[error("Invalid {field}: '{value}' is not a number")]
    InvalidInput { field: Field, value: String },

    /// The number is outside the valid range for its field.
    #[error("{0}")]
    OutOfRange(#[from] CoordError),
}

/// Parse one decimal-degree value.
///
/// Leading and trailing whitespace is ignored. Text that parses to NaN or an
/// infinity is treated as not-a-number.
pub fn parse_degrees(field: Field, input: &str) -> Result<f64, QueryError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(QueryError::InvalidInput {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// Parse latitude and longitude text into a validated coordinate.
///
/// # Example
///
/// ```
/// use nearport::query::{parse_coordinate, QueryError};
///
/// let c = parse_coordinate(" 51.47 ", "-0.4543").unwrap();
/// assert_eq!(c.latitude(), 51.47);
///
/// assert!(matches!(
///     parse_coordinate("north", "0"),
///     Err(QueryError::InvalidInput { .. })
/// ));
/// ```
pub fn parse_coordinate(latitude: &str, longitude: &str) -> Result<Coordinate, QueryError> {
    let lat = parse_degrees(Field::Latitude, latitude)?;
    let lon = parse_degrees(Field::Longitude, longitude)?;
    Ok(Coordinate::new(lat, lon)?)
}
