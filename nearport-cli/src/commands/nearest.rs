//! One-shot lookup: `nearport nearest --lat <deg> --lon <deg>`.

use std::path::PathBuf;

use clap::Args;
use nearport::coord::DistanceUnit;
use nearport::query::parse_coordinate;
use tracing::info;

use crate::error::CliError;
use crate::output::format_result;
use crate::runner::CliRunner;

/// Arguments for the `nearest` command.
#[derive(Debug, Args)]
pub struct NearestArgs {
    /// Latitude in decimal degrees (-90 to 90)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: String,

    /// Longitude in decimal degrees (-180 to 180)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: String,

    /// Airport CSV to search instead of the configured one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Distance unit (km, nm, mi); overrides output.unit
    #[arg(long)]
    pub unit: Option<DistanceUnit>,
}

/// Run the nearest command.
pub fn run(args: NearestArgs, verbose: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(verbose)?;
    runner.log_startup("nearest");

    let query = parse_coordinate(&args.lat, &args.lon)?;
    let catalog = runner.load_catalog(args.catalog.as_deref())?;
    let result = catalog.nearest(&query)?;

    info!(
        query = %query,
        airport = %result.airport.name,
        distance_km = result.distance_km,
        "Nearest airport found"
    );

    let mut settings = runner.config().output.clone();
    if let Some(unit) = args.unit {
        settings.unit = unit;
    }

    println!("{}", format_result(&query, &result, &settings));
    Ok(())
}
