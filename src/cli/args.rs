//! CLI argument definitions using clap
//!
//! Commands:
//! - itemd start [--config <path>] [--host <host>] [--port <port>] [--no-seed] [--verbose]
//! - itemd check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// itemd - A minimal in-memory item CRUD service
#[derive(Parser, Debug)]
#[command(name = "itemd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Start {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Start with an empty store
        #[arg(long)]
        no_seed: bool,

        /// Enable verbose debug logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a configuration file and print the effective config
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./itemd.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
