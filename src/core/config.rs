//! Session configuration.
//!
//! Games are configured by building a `GameConfig` in code or by loading a
//! TOML file. Every field has a default, so a partial file only overrides
//! what it names:
//!
//! ```toml
//! player_names = ["Ada", "Grace"]
//! log_filter = "rust_mancala=debug"
//! ```
//!
//! Board size and rules are fixed and cannot be configured.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::player::{Player, PlayerMap};
use crate::error::ConfigError;

/// Config file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "mancala.toml";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "rust_mancala=info";

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Display names, Player 1 first.
    pub player_names: PlayerMap<String>,

    /// Filter directive for log output (overridden by `RUST_LOG`).
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: PlayerMap::new(|player| player.to_string()),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with default names and log filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a player's display name.
    #[must_use]
    pub fn with_name(mut self, player: Player, name: impl Into<String>) -> Self {
        self.player_names[player] = name.into();
        self
    }

    /// Set the log filter directive.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Get a player's display name.
    #[must_use]
    pub fn name(&self, player: Player) -> &str {
        &self.player_names[player]
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist. Parse and validation errors still fail.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (player, name) in self.player_names.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "player_names: name for {player} must not be empty"
                )));
            }
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log_filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&GameConfig::default())?)
    }
}
