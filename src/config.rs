//! Game configuration loaded from TOML and command-line overrides.

use crate::render::PlayerNames;
use connect6_engine::{DEFAULT_WIN_LENGTH, GameConfig, Topology};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one process invocation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board topology (`standard` or `torus`).
    #[serde(default)]
    mode: Topology,

    /// Board side length.
    #[serde(default = "default_size")]
    size: usize,

    /// Stones in a row needed to win.
    #[serde(default = "default_win_length")]
    win_length: usize,

    /// Names of the first and second player.
    #[serde(default = "default_player_names")]
    player_names: Vec<String>,
}

#[instrument]
fn default_size() -> usize {
    18
}

#[instrument]
fn default_win_length() -> usize {
    DEFAULT_WIN_LENGTH
}

#[instrument]
fn default_player_names() -> Vec<String> {
    vec!["P1".to_string(), "P2".to_string()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Topology::default(),
            size: default_size(),
            win_length: default_win_length(),
            player_names: default_player_names(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file; missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides; `None` keeps the current value.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<Topology>,
        size: Option<usize>,
        win_length: Option<usize>,
    ) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(win_length) = win_length {
            self.win_length = win_length;
        }
        self
    }

    /// Validates the settings into an engine configuration.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.size, self.mode, self.win_length)
            .map_err(|e| ConfigError::new(format!("Invalid game settings: {}", e)))
    }

    /// Validates the player names.
    #[instrument(skip(self))]
    pub fn names(&self) -> Result<PlayerNames, ConfigError> {
        match self.player_names.as_slice() {
            [first, second] if first.trim().is_empty() || second.trim().is_empty() => {
                Err(ConfigError::new("Player names must not be empty".to_string()))
            }
            [first, second] if first == second => {
                Err(ConfigError::new(format!("Player names must differ, both are '{}'", first)))
            }
            [first, second] => Ok(PlayerNames::new(first.as_str(), second.as_str())),
            names => Err(ConfigError::new(format!(
                "Exactly two player names required, got {}",
                names.len()
            ))),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        let game = config.game_config().unwrap();
        assert_eq!(game.size(), 18);
        assert_eq!(game.topology(), Topology::Standard);
        assert_eq!(config.names().unwrap(), PlayerNames::default());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = AppConfig::default().with_overrides(Some(Topology::Torus), None, Some(5));
        assert_eq!(*config.mode(), Topology::Torus);
        assert_eq!(*config.size(), 18);
        assert_eq!(*config.win_length(), 5);
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let config = AppConfig::default().with_overrides(None, Some(4), Some(6));
        let err = config.game_config().unwrap_err();
        assert!(err.message.contains("win length"));
    }

    #[test]
    fn test_rejects_bad_names() {
        let mut config = AppConfig::default();
        config.player_names = vec!["A".to_string(), "A".to_string()];
        assert!(config.names().is_err());
        config.player_names = vec!["A".to_string()];
        assert!(config.names().is_err());
        config.player_names = vec!["A".to_string(), " ".to_string()];
        assert!(config.names().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("mode = \"torus\"\nsize = 20\n").unwrap();
        assert_eq!(*config.mode(), Topology::Torus);
        assert_eq!(*config.size(), 20);
        assert_eq!(*config.win_length(), DEFAULT_WIN_LENGTH);
    }
}
