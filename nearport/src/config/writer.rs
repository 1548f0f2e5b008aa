//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::defaults::MAX_PRECISION;
use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let catalog_path = config
        .catalog
        .path
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[catalog]
; Airport data file (CSV with NAME, ICAO, Latitude, Longitude columns)
; Header names are matched case-insensitively. ICAO may be omitted.
; If empty, the bundled airport list is used.
; Example: path = ~/data/airports.csv
path = {}

[output]
; Unit for reported distances:
;   km - kilometers (default)
;   nm - nautical miles
;   mi - statute miles
unit = {}
; Decimal places shown for distances (0-{}, default: 6)
precision = {}

[logging]
; Log file path (default: ~/.nearport/nearport.log)
file = {}
"#,
        catalog_path,
        config.output.unit,
        MAX_PRECISION,
        config.output.precision,
        path_to_string(&config.logging.file),
    )
}

/// Convert path to string, collapsing home dir to ~.
pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
