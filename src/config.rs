//! Engine configuration.

use crate::games::tictactoe::BoardEncoding;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a [`Lowdie`](crate::Lowdie) engine.
///
/// Every field has a default, so an empty TOML file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How boards are drawn in conversation output.
    #[serde(default)]
    board_encoding: BoardEncoding,

    /// Wrap boards in a Markdown code fence.
    #[serde(default = "default_code_fence")]
    code_fence: bool,

    /// Seed for computer moves; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Text that restarts a conversation from the greeting.
    #[serde(default = "default_restart_command")]
    restart_command: String,
}

#[instrument]
fn default_code_fence() -> bool {
    true
}

#[instrument]
fn default_restart_command() -> String {
    "/start".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_encoding: BoardEncoding::default(),
            code_fence: default_code_fence(),
            seed: None,
            restart_command: default_restart_command(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read config file {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?;

        let config = Self::from_toml(&content)?;
        info!(
            encoding = ?config.board_encoding,
            seeded = config.seed.is_some(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with the given board encoding.
    pub fn with_board_encoding(mut self, board_encoding: BoardEncoding) -> Self {
        self.board_encoding = board_encoding;
        self
    }

    /// Returns a copy with code fences switched on or off.
    pub fn with_code_fence(mut self, code_fence: bool) -> Self {
        self.code_fence = code_fence;
        self
    }

    /// Returns a copy with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Failure to read or parse an [`EngineConfig`].
#[derive(Debug, Clone, Display, Error)]
#[display("Engine config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// What went wrong, with the path or TOML detail.
    pub message: String,
    /// Line of the call that raised the error.
    pub line: u32,
    /// Source file of the call that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Records `message` at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(*config.code_fence());
        assert_eq!(config.restart_command(), "/start");
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml("board_encoding = \"pretty\"\nseed = 9\n").unwrap();
        assert_eq!(*config.board_encoding(), BoardEncoding::Pretty);
        assert_eq!(*config.seed(), Some(9));
        assert!(*config.code_fence());
    }

    #[test]
    fn test_bad_encoding_rejected() {
        let err = EngineConfig::from_toml("board_encoding = \"fancy\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_error_names_engine_config() {
        let err = EngineConfig::from_toml("seed = \"soon\"").unwrap_err();
        let shown = err.to_string();
        assert!(shown.starts_with("Engine config error: Failed to parse config"));
        assert!(shown.contains("config.rs"));
    }
}
