//! Interactive lookup loop.
//!
//! Asks for a latitude and longitude, prints the nearest airport, and offers
//! another lookup. Leaving either coordinate empty or declining another
//! lookup ends the session. Input that can't be used prints
//! [`INPUT_ERROR_MESSAGE`] and asks again.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use nearport::airport::AirportCatalog;
use nearport::config::OutputSettings;
use nearport::query::{parse_coordinate, Field};
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::{format_result, INPUT_ERROR_MESSAGE};
use crate::runner::CliRunner;

/// Arguments for the `interactive` command.
#[derive(Debug, Args, Default)]
pub struct InteractiveArgs {
    /// Airport CSV to search instead of the configured one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Source of user answers for the lookup loop.
pub trait Prompter {
    /// Read the text typed for one coordinate field. Empty means quit.
    fn coordinate(&mut self, field: Field) -> Result<String, CliError>;

    /// Ask whether to look up another location.
    fn another(&mut self) -> Result<bool, CliError>;
}

/// Terminal prompts via dialoguer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn coordinate(&mut self, field: Field) -> Result<String, CliError> {
        let prompt = match field {
            Field::Latitude => "Latitude (decimal degrees)",
            Field::Longitude => "Longitude (decimal degrees)",
        };

        let text: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(text)
    }

    fn another(&mut self) -> Result<bool, CliError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Look up another location?")
            .default(true)
            .interact()?)
    }
}

/// Run the interactive command.
pub fn run(args: InteractiveArgs, verbose: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(verbose)?;
    runner.log_startup("interactive");

    let catalog = runner.load_catalog(args.catalog.as_deref())?;

    println!();
    println!("{}", style("Nearest Airport Finder").bold().underlined());
    println!(
        "{}",
        style(format!(
            "{} airports loaded. Leave a value empty to quit.",
            catalog.len()
        ))
        .dim()
    );
    println!();

    let mut prompter = TerminalPrompter::new();
    let lookups = run_loop(
        &mut prompter,
        &catalog,
        &runner.config().output,
        &mut io::stdout(),
    )?;

    info!(lookups, "Interactive session finished");
    Ok(())
}

/// Drive the lookup loop until the user stops.
///
/// Returns the number of successful lookups.
pub fn run_loop<P: Prompter, W: Write>(
    prompter: &mut P,
    catalog: &AirportCatalog,
    settings: &OutputSettings,
    out: &mut W,
) -> Result<usize, CliError> {
    let mut lookups = 0;

    loop {
        let latitude = prompter.coordinate(Field::Latitude)?;
        if latitude.trim().is_empty() {
            return Ok(lookups);
        }
        let longitude = prompter.coordinate(Field::Longitude)?;
        if longitude.trim().is_empty() {
            return Ok(lookups);
        }

        let query = match parse_coordinate(&latitude, &longitude) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = %e, "Rejected coordinate input");
                writeln!(out, "{}", INPUT_ERROR_MESSAGE)?;
                continue;
            }
        };

        let result = catalog.nearest(&query)?;
        writeln!(out, "{}", format_result(&query, &result, settings))?;
        lookups += 1;

        if !prompter.another()? {
            return Ok(lookups);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearport::airport::Airport;
    use nearport::coord::Coordinate;
    use std::collections::VecDeque;

    /// Replays canned answers in order.
    struct ScriptedPrompter {
        coordinates: VecDeque<&'static str>,
        answers: VecDeque<bool>,
        fields: Vec<Field>,
    }

    impl ScriptedPrompter {
        fn new(coordinates: &[&'static str], answers: &[bool]) -> Self {
            Self {
                coordinates: coordinates.iter().copied().collect(),
                answers: answers.iter().copied().collect(),
                fields: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn coordinate(&mut self, field: Field) -> Result<String, CliError> {
            self.fields.push(field);
            Ok(self.coordinates.pop_front().unwrap_or("").to_string())
        }

        fn another(&mut self) -> Result<bool, CliError> {
            Ok(self.answers.pop_front().unwrap_or(false))
        }
    }

    fn catalog() -> AirportCatalog {
        AirportCatalog::from_airports(vec![
            Airport::new("A", "Alpha", Coordinate::new(0.0, 0.0).unwrap()),
            Airport::new("B", "Bravo", Coordinate::new(10.0, 10.0).unwrap()),
        ])
    }

    fn run_script(prompter: &mut ScriptedPrompter) -> (usize, String) {
        let mut out = Vec::new();
        let lookups = run_loop(prompter, &catalog(), &OutputSettings::default(), &mut out)
            .unwrap();
        (lookups, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_single_lookup_then_no() {
        let mut prompter = ScriptedPrompter::new(&["9", "9"], &[false]);

        let (lookups, out) = run_script(&mut prompter);

        assert_eq!(lookups, 1);
        assert!(out.contains("The closest airport to 9 LAT, 9 LON is:"));
        assert!(out.contains("    Bravo (B)\n"));
        assert_eq!(prompter.fields, vec![Field::Latitude, Field::Longitude]);
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let mut prompter = ScriptedPrompter::new(&["north", "0", "0", "0"], &[false]);

        let (lookups, out) = run_script(&mut prompter);

        assert_eq!(lookups, 1);
        assert!(out.starts_with(INPUT_ERROR_MESSAGE));
        assert!(out.contains("    Alpha (A)\n"));
    }

    #[test]
    fn test_out_of_range_reprompts() {
        let mut prompter = ScriptedPrompter::new(&["95", "0"], &[]);

        let (lookups, out) = run_script(&mut prompter);

        assert_eq!(lookups, 0);
        assert_eq!(out, format!("{}\n", INPUT_ERROR_MESSAGE));
    }

    #[test]
    fn test_several_lookups() {
        let mut prompter = ScriptedPrompter::new(&["0", "0", "10", "10"], &[true, false]);

        let (lookups, out) = run_script(&mut prompter);

        assert_eq!(lookups, 2);
        assert_eq!(out.matches("The closest airport").count(), 2);
    }

    #[test]
    fn test_empty_latitude_quits_immediately() {
        let mut prompter = ScriptedPrompter::new(&[""], &[]);

        let (lookups, out) = run_script(&mut prompter);

        assert_eq!(lookups, 0);
        assert!(out.is_empty());
        assert_eq!(prompter.fields, vec![Field::Latitude]);
    }

    #[test]
    fn test_empty_longitude_quits() {
        let mut prompter = ScriptedPrompter::new(&["10", "  "], &[]);

        let (lookups, _) = run_script(&mut prompter);

        assert_eq!(lookups, 0);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let mut prompter = ScriptedPrompter::new(&["0", "0"], &[]);
        let mut out = Vec::new();

        let result = run_loop(
            &mut prompter,
            &AirportCatalog::default(),
            &OutputSettings::default(),
            &mut out,
        );

        assert!(matches!(result, Err(CliError::Nearest(_))));
    }
}
