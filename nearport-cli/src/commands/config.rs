//! `nearport config`: read and edit `~/.nearport/config.ini`.
//!
//! Keys are addressed as `section.key`, e.g. `output.unit`.

use clap::Subcommand;
use nearport::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// `nearport config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one setting
    Get {
        /// Setting name, e.g. output.unit
        key: String,
    },

    /// Change one setting and save the file
    Set {
        /// Setting name, e.g. output.unit
        key: String,

        /// New value; an empty catalog.path selects the bundled airports
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Print every setting grouped by section
    List,

    /// Print where the configuration file lives
    Path,

    /// Write a default configuration file if there is none
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => {
            let key = parse_key(&key)?;
            println!("{}", display_value(key.get(&ConfigFile::load()?)));
        }
        ConfigCommands::Set { key, value } => {
            let key = parse_key(&key)?;
            let mut config = ConfigFile::load()?;
            key.set(&mut config, &value)
                .map_err(|e| CliError::Config(e.to_string()))?;
            config.save()?;
            println!("Set {} = {}", key.name(), display_value(key.get(&config)));
        }
        ConfigCommands::List => print!("{}", render_list(&ConfigFile::load()?)),
        ConfigCommands::Path => println!("{}", config_file_path().display()),
        ConfigCommands::Init => {
            let path = config_file_path();
            if ConfigFile::create_if_missing(&path)? {
                println!("Created configuration file: {}", path.display());
            } else {
                println!("Configuration file already exists: {}", path.display());
            }
        }
    }
    Ok(())
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'nearport config list' to see available keys.",
            key
        ))
    })
}

/// Values left empty (the catalog path) print as "(not set)".
fn display_value(value: String) -> String {
    if value.is_empty() {
        "(not set)".to_string()
    } else {
        value
    }
}

/// One INI-style block per section, separated by blank lines.
fn render_list(config: &ConfigFile) -> String {
    ConfigKey::all()
        .chunk_by(|a, b| a.section() == b.section())
        .map(|keys| {
            let mut block = format!("[{}]\n", keys[0].section());
            for key in keys {
                let value = display_value(key.get(config));
                block.push_str(&format!("  {} = {}\n", key.key_name(), value));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}
