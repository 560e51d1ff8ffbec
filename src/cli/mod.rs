//! CLI module for itemd
//!
//! Provides command-line interface for:
//! - start: Seed the store and serve the HTTP API
//! - check-config: Validate a configuration file and print it

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, resolve_config, run, run_command, start};
pub use errors::{CliError, CliErrorCode, CliResult};
