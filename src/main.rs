//! Grid Games - console game hub
//!
//! Shows the variant menu, or plays a single match with `--variant`.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use grid_games::cli::Cli;
use grid_games::{HubConfig, Hub, LineInput};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (config_path, required) = cli.config_source();
    let config = HubConfig::load(&config_path, required)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
        .with_seed(cli.seed)
        .with_dictionary(cli.dictionary.clone())
        .with_log_filter(cli.log.clone());

    initialize_tracing(config.log_filter());
    info!(config = ?config, "Starting Grid Games");

    let stdin = std::io::stdin();
    let mut hub = Hub::new(config, LineInput::new(stdin.lock()), std::io::stdout());

    match cli.variant {
        Some(variant) => {
            hub.play(variant)
                .with_context(|| format!("Match of {} failed", variant))?;
        }
        None => hub.run_menu().context("Game hub failed")?,
    }

    info!("Grid Games exiting");
    Ok(())
}

/// Logs go to stderr so they never interleave with the game on stdout.
#[instrument]
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
