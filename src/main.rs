//! Connect6 - command loop binary
//!
//! Reads commands from stdin, one per line, and answers on stdout. Logs go
//! to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use connect6::{AppConfig, Session, run};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_level.as_deref());

    let config = load_config(&cli)?;
    let game_config = config.game_config()?;
    let names = config.names()?;

    let mut session = Session::new(game_config, names);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&mut session, stdin.lock(), stdout.lock())?;

    info!("Command loop finished");
    Ok(())
}

#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            AppConfig::default()
        }
    };
    Ok(config.with_overrides(cli.mode, cli.size, cli.win_length))
}

fn initialize_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
