//! Airport data CLI commands.
//!
//! `catalog check` loads the configured (or given) CSV and reports which rows
//! were accepted and which were skipped.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Catalog subcommands.
#[derive(Debug, Subcommand)]
pub enum CatalogCommands {
    /// Load airport data and list rejected rows
    Check {
        /// Airport CSV to check instead of the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Run a catalog subcommand.
pub fn run(command: CatalogCommands, verbose: bool) -> Result<(), CliError> {
    match command {
        CatalogCommands::Check { catalog } => run_check(catalog, verbose),
    }
}

/// Load the catalog and print its load report.
fn run_check(catalog: Option<PathBuf>, verbose: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(verbose)?;
    runner.log_startup("catalog check");

    let source = runner.catalog_source(catalog.as_deref());
    let (catalog, report) = runner.load_catalog_report(&source)?;

    println!("Source:   {}", source);
    println!("Rows:     {}", report.rows_read);
    println!("Airports: {}", catalog.len());
    println!("Skipped:  {}", report.skipped.len());

    if !report.is_clean() {
        println!();
        for record in &report.skipped {
            println!("  {} {}", style("✗").red(), record);
        }
    }

    if catalog.is_empty() {
        return Err(CliError::EmptyCatalog { source });
    }

    Ok(())
}
