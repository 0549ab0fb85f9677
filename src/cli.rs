//! Command-line interface for grid_games.

use crate::games::Variant;
use clap::Parser;
use std::path::PathBuf;

/// Grid Games - two-player grid games in the tic-tac-toe family
#[derive(Parser, Debug)]
#[command(name = "grid_games")]
#[command(about = "Console hub for tic-tac-toe variants", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the hub configuration file (default: grid_games.toml, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fixed seed for computer players and obstacles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Word list for the word variant
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Play one match of this variant instead of showing the menu
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Log filter (overrides the config file; RUST_LOG wins over both)
    #[arg(long)]
    pub log: Option<String>,
}

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "grid_games.toml";

impl Cli {
    /// The config file to read, and whether it must exist.
    ///
    /// A named file is required; the default one is optional.
    pub fn config_source(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG), false),
        }
    }
}
