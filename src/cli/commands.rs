//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::store::{InMemoryItemStore, ItemRepository};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a single parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Start {
            config,
            host,
            port,
            no_seed,
            verbose,
        } => {
            init_tracing(verbose);
            let config = resolve_config(config.as_deref(), host, port, no_seed)?;
            start(config)
        }
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Merge the optional config file with command-line overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    no_seed: bool,
) -> CliResult<ServiceConfig> {
    let mut config = match path {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }
    if no_seed {
        config.seed = false;
    }

    config.validate()?;
    Ok(config)
}

/// Build the store, then serve until a shutdown signal arrives
pub fn start(config: ServiceConfig) -> CliResult<()> {
    let store = if config.seed {
        InMemoryItemStore::seeded()?
    } else {
        InMemoryItemStore::new()
    };
    info!(items = store.len()?, seeded = config.seed, "item store ready");

    let server = HttpServer::new(config.http, Arc::new(store));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
}

/// Validate a config file and print the effective config
pub fn check_config(path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(path)?;

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
