//! Hub configuration file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the game hub, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HubConfig {
    /// Fixed RNG seed. A random seed is drawn when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Word list for the word variant.
    #[serde(default = "default_dictionary")]
    dictionary: PathBuf,

    /// Obstacles dropped after each placement in the obstacles variant.
    #[serde(default = "default_obstacles_per_turn")]
    obstacles_per_turn: usize,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_dictionary() -> PathBuf {
    PathBuf::from("dic.txt")
}

#[instrument]
fn default_obstacles_per_turn() -> usize {
    2
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            seed: None,
            dictionary: default_dictionary(),
            obstacles_per_turn: default_obstacles_per_turn(),
            log_filter: default_log_filter(),
        }
    }
}

impl HubConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, dictionary = %config.dictionary.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    ///
    /// With `required`, a missing file is an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, required: bool) -> Result<Self, ConfigError> {
        if !required && !path.as_ref().exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Replaces the dictionary path.
    pub fn with_dictionary(mut self, dictionary: Option<PathBuf>) -> Self {
        if let Some(dictionary) = dictionary {
            self.dictionary = dictionary;
        }
        self
    }

    /// Replaces the log filter.
    pub fn with_log_filter(mut self, filter: Option<String>) -> Self {
        if let Some(filter) = filter {
            self.log_filter = filter;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
