//! Match configuration, loadable from TOML

use std::path::Path;

use game_core::{GameError, Variant};
use serde::{Deserialize, Serialize};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Which game to play
    pub variant: Variant,
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Keep undo snapshots of every position played
    pub record_history: bool,
    /// Print the board after every move
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Chess,
            num_games: 10,
            max_plies: 200,
            alternate_colors: true,
            record_history: false,
            verbose: false,
        }
    }
}

impl MatchConfig {
    /// Parses a TOML document. Missing keys take their default values.
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        let config: MatchConfig =
            toml::from_str(text).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GameError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, GameError> {
        toml::to_string_pretty(self).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_games == 0 {
            return Err(GameError::InvalidConfig("num_games must be at least 1".into()));
        }
        if self.max_plies == 0 {
            return Err(GameError::InvalidConfig("max_plies must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
