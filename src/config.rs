//! Application configuration loaded from TOML.

use crate::games::tictactoe::DEFAULT_RESTART_DELAY;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct GameConfig {
    /// Milliseconds between the end of a round and the next one.
    #[serde(default = "default_restart_delay_ms")]
    restart_delay_ms: u64,

    /// File holding the saved theme.
    #[serde(default = "default_theme_file")]
    theme_file: PathBuf,

    /// File receiving log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_restart_delay_ms() -> u64 {
    DEFAULT_RESTART_DELAY.as_millis() as u64
}

#[instrument]
fn default_theme_file() -> PathBuf {
    PathBuf::from("strictly_tictactoe_theme.toml")
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_tictactoe.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            restart_delay_ms: default_restart_delay_ms(),
            theme_file: default_theme_file(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Restart delay as a duration.
    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(restart_delay_ms = config.restart_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
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
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.restart_delay(), Duration::from_secs(2));
        assert_eq!(config.theme_file(), &PathBuf::from("strictly_tictactoe_theme.toml"));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: GameConfig = toml::from_str("restart_delay_ms = 500").unwrap();
        assert_eq!(config.restart_delay(), Duration::from_millis(500));
        assert_eq!(config.log_file(), &PathBuf::from("strictly_tictactoe.log"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }
}
