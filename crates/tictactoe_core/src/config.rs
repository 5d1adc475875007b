//! Engine configuration loaded from TOML.

use super::{Difficulty, Mode};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Starting settings for a [`GameEngine`](crate::GameEngine).
///
/// ```toml
/// mode = "human-vs-computer"
/// difficulty = "hard"
/// seed = 42
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Who the human plays against.
    mode: Mode,

    /// Strength of the computer opponent.
    difficulty: Difficulty,

    /// Seed for the computer's random choices; random when absent.
    seed: Option<u64>,
}

impl EngineConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(mode: Mode, difficulty: Difficulty, seed: Option<u64>) -> Self {
        Self {
            mode,
            difficulty,
            seed,
        }
    }

    /// Replaces the mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
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
    fn test_empty_config_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(*config.mode(), Mode::HumanVsHuman);
        assert_eq!(*config.difficulty(), Difficulty::Medium);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_full_config() {
        let config = EngineConfig::from_toml_str(
            "mode = \"human-vs-computer\"\ndifficulty = \"hard\"\nseed = 42\n",
        )
        .unwrap();
        assert_eq!(
            config,
            EngineConfig::new(Mode::HumanVsComputer, Difficulty::Hard, Some(42))
        );
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let err = EngineConfig::from_toml_str("difficulty = \"impossible\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(EngineConfig::from_toml_str("colour = \"blue\"").is_err());
    }
}
