//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`catalog`] - Airport data inspection (check)
//! - [`config`] - Configuration management (get, set, list, path, init)
//! - [`interactive`] - Prompt loop (default command)
//! - [`nearest`] - Single lookup from command-line coordinates

pub mod catalog;
pub mod config;
pub mod interactive;
pub mod nearest;
