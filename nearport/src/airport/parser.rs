//! Parser for CSV airport datasets.
//!
//! The first row names the columns. Column names are matched
//! case-insensitively so `NAME`, `Name` and `name` are all accepted.
//! Each following row describes one airport.
//!
//! Rows that cannot be turned into an [`Airport`] are skipped with a warning
//! and recorded in the [`LoadReport`]; only failures that make the whole
//! source unreadable abort the parse.

use std::fmt;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use thiserror::Error;

use super::Airport;
use crate::coord::Coordinate;

/// Columns every dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 3] = ["name", "latitude", "longitude"];

/// Error type for CSV catalog parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column '{0}' in header row")]
    MissingColumn(String),
}

/// A row that was skipped while loading the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based line number in the source (0 if unknown).
    pub line: u64,
    /// Why the row was rejected.
    pub reason: String,
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Summary of a catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows seen, excluding the header.
    pub rows_read: usize,
    /// Rows that were rejected, in source order.
    pub skipped: Vec<MalformedRecord>,
}

impl LoadReport {
    /// Number of rows that became airports.
    pub fn accepted(&self) -> usize {
        self.rows_read - self.skipped.len()
    }

    /// True when no row was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, line: u64, reason: String) {
        tracing::warn!(line, reason = %reason, "Skipping malformed airport record");
        self.skipped.push(MalformedRecord { line, reason });
    }
}

/// Shape of one data row after header normalization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(default)]
    icao: String,
    latitude: f64,
    longitude: f64,
}

/// Parser for CSV airport datasets.
pub struct CsvCatalogParser;

impl CsvCatalogParser {
    /// Parse every row of a CSV source.
    ///
    /// Returns the accepted airports in source order together with a report
    /// of the rows that were skipped.
    pub fn parse<R: Read>(reader: R) -> Result<(Vec<Airport>, LoadReport), ParseError> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers: StringRecord = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_lowercase())
            .collect();

        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ParseError::MissingColumn(column.to_string()));
            }
        }

        let mut airports = Vec::new();
        let mut report = LoadReport::default();

        for result in csv_reader.records() {
            report.rows_read += 1;

            let record = match result {
                Ok(record) => record,
                Err(e) if is_row_error(&e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    report.skip(line, describe(&e));
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let line = record.position().map(|p| p.line()).unwrap_or(0);
            match Self::parse_record(&record, &headers) {
                Ok(airport) => airports.push(airport),
                Err(reason) => report.skip(line, reason),
            }
        }

        tracing::debug!(
            rows = report.rows_read,
            skipped = report.skipped.len(),
            "Parsed airport CSV"
        );

        Ok((airports, report))
    }

    /// Turn one CSV record into an airport, or explain why it can't be.
    fn parse_record(record: &StringRecord, headers: &StringRecord) -> Result<Airport, String> {
        let row: CsvRow = record
            .deserialize(Some(headers))
            .map_err(|e| describe(&e))?;

        let name = row.name.trim();
        if name.is_empty() {
            return Err("empty airport name".to_string());
        }

        let location = Coordinate::new(row.latitude, row.longitude).map_err(|e| e.to_string())?;

        Ok(Airport::new(row.icao.trim(), name, location))
    }
}

/// Errors that affect a single record; the reader can carry on after them.
fn is_row_error(e: &csv::Error) -> bool {
    matches!(
        e.kind(),
        csv::ErrorKind::UnequalLengths { .. }
            | csv::ErrorKind::Utf8 { .. }
            | csv::ErrorKind::Deserialize { .. }
    )
}

/// Short reason text without the position prefix csv adds.
fn describe(e: &csv::Error) -> String {
    match e.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {} fields, found {}", expected_len, len),
        csv::ErrorKind::Utf8 { err, .. } => err.to_string(),
        _ => e.to_string(),
    }
}
