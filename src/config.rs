//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for grid generation. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Whether to colorize console output.
    #[serde(default = "default_color")]
    color: bool,

    /// Whether to show the grid before the first turn.
    #[serde(default = "default_show_initial_grid")]
    show_initial_grid: bool,

    /// Where to write the JSON summary after the game.
    #[serde(default)]
    summary_path: Option<PathBuf>,
}

#[instrument]
fn default_color() -> bool {
    true
}

#[instrument]
fn default_show_initial_grid() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            color: default_color(),
            show_initial_grid: default_show_initial_grid(),
            summary_path: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, color = config.color, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        no_color: bool,
        summary_path: Option<PathBuf>,
    ) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if no_color {
            self.color = false;
        }
        if summary_path.is_some() {
            self.summary_path = summary_path;
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
