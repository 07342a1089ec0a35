//! Game configuration loaded from TOML.

use crate::games::tictactoe::{Mark, Strategy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Names, marks and opponent settings for a run.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// player_one_name = "Ada"
/// strategy = "random"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Name of the first human player.
    #[serde(default = "default_player_one_name")]
    player_one_name: String,

    /// Name of the second human player (two player mode).
    #[serde(default = "default_player_two_name")]
    player_two_name: String,

    /// Name shown for the computer opponent.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Mark used by the first human; the other player gets the opposite mark.
    #[serde(default = "default_player_one_mark")]
    player_one_mark: Mark,

    /// How the computer picks moves.
    #[serde(default)]
    strategy: Strategy,

    /// Seed for the computer's random picks. Entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Let the computer move first in single player mode.
    #[serde(default)]
    computer_first: bool,
}

fn default_player_one_name() -> String {
    "Player 1".to_string()
}

fn default_player_two_name() -> String {
    "Player 2".to_string()
}

fn default_computer_name() -> String {
    "Computer".to_string()
}

fn default_player_one_mark() -> Mark {
    Mark::O
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_name: default_player_one_name(),
            player_two_name: default_player_two_name(),
            computer_name: default_computer_name(),
            player_one_mark: default_player_one_mark(),
            strategy: Strategy::default(),
            seed: None,
            computer_first: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml(&content)?;
        info!(strategy = %config.strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.player_one_name.trim().is_empty() {
            return Err(ConfigError::new("player_one_name must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
