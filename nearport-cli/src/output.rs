//! Rendering of lookup results.

use nearport::config::OutputSettings;
use nearport::coord::Coordinate;
use nearport::nearest::QueryResult;

/// Shown when latitude or longitude input can't be used.
pub const INPUT_ERROR_MESSAGE: &str = "There was an error reading your input. Please try again.";

/// Format the nearest airport to `query` for display.
///
/// ```text
/// The closest airport to 43.6 LAT, 1.4 LON is:
///     Toulouse-Blagnac (LFBO)
/// at a distance of:
///     4.354676 km
/// ```
pub fn format_result(
    query: &Coordinate,
    result: &QueryResult<'_>,
    settings: &OutputSettings,
) -> String {
    let airport = result.airport;
    let label = if airport.icao.is_empty() {
        airport.name.clone()
    } else {
        format!("{} ({})", airport.name, airport.icao)
    };

    format!(
        "The closest airport to {} is:\n    {}\nat a distance of:\n    {:.*} {}",
        query,
        label,
        settings.precision,
        result.distance_in(settings.unit),
        settings.unit.suffix()
    )
}
