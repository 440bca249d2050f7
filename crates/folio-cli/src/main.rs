//! Folio CLI
//!
//! Command-line diagnostics for Folio access control lists.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio_cli::cli::Cli;
use folio_cli::commands;
use folio_cli::config::{DEFAULT_LOG_FILTER, FolioConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = FolioConfig::load(cli.config.as_deref())?;

    // Initialize logging
    let env_filter = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = config.log_filter(cli.verbose, env_filter.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(config = ?config, "Loaded configuration");

    match commands::run(&cli, &config) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            tracing::error!("{e}");
            Err(e.into())
        }
    }
}
