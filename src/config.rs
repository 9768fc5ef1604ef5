//! Game configuration file.

use crate::console::{ConsoleSettings, Presets};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration loaded from a TOML file.
///
/// ```toml
/// size = 5
/// winning_condition = 4
/// color = false
/// clear_screen = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size used for every game instead of prompting.
    #[serde(default)]
    size: Option<usize>,

    /// Winning condition used for every game instead of prompting.
    #[serde(default)]
    winning_condition: Option<usize>,

    /// Style error and header text with colors.
    #[serde(default = "default_true")]
    color: bool,

    /// Clear the screen after every move.
    #[serde(default = "default_true")]
    clear_screen: bool,
}

#[instrument]
fn default_true() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: None,
            winning_condition: None,
            color: default_true(),
            clear_screen: default_true(),
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

        info!(size = ?config.size, winning_condition = ?config.winning_condition, "Config loaded successfully");
        Ok(config)
    }

    /// Overrides file values with command-line values.
    #[instrument(skip(self))]
    pub fn merge(
        mut self,
        size: Option<usize>,
        winning_condition: Option<usize>,
        no_color: bool,
        no_clear: bool,
    ) -> Self {
        self.size = size.or(self.size);
        self.winning_condition = winning_condition.or(self.winning_condition);
        self.color &= !no_color;
        self.clear_screen &= !no_clear;
        self
    }

    /// Validates the preset board setup.
    #[instrument(skip(self))]
    pub fn presets(&self) -> Result<Presets, ConfigError> {
        Presets::new(self.size, self.winning_condition)
            .map_err(|e| ConfigError::new(format!("Invalid preset: {}", e)))
    }

    /// Console settings for the given terminal.
    pub fn console_settings(&self, interactive: bool) -> ConsoleSettings {
        ConsoleSettings {
            color: self.color,
            clear_screen: self.clear_screen,
            raw_keys: interactive,
        }
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
