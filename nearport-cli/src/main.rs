//! Nearport CLI - Command-line interface
//!
//! This binary finds the airport nearest to a latitude/longitude using the
//! nearport library. With no subcommand it starts the interactive prompt.

mod commands;
mod error;
mod output;
mod runner;

use clap::{Parser, Subcommand};

use commands::catalog::CatalogCommands;
use commands::config::ConfigCommands;
use commands::interactive::InteractiveArgs;
use commands::nearest::NearestArgs;

#[derive(Parser)]
#[command(name = "nearport")]
#[command(version = nearport::VERSION)]
#[command(about = "Find the airport nearest to a location", long_about = None)]
struct Cli {
    /// Print log output to stderr at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the nearest airport to the given coordinates
    Nearest(NearestArgs),

    /// Prompt for coordinates until you quit (default)
    Interactive(InteractiveArgs),

    /// Inspect airport data
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },

    /// View or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = match cli.command {
        Some(Commands::Nearest(args)) => commands::nearest::run(args, verbose),
        Some(Commands::Interactive(args)) => commands::interactive::run(args, verbose),
        Some(Commands::Catalog { command }) => commands::catalog::run(command, verbose),
        Some(Commands::Config { command }) => commands::config::run(command),
        None => commands::interactive::run(InteractiveArgs::default(), verbose),
    };

    if let Err(e) = result {
        e.exit();
    }
}
