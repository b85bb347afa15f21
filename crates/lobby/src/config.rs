//! Lobby settings loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use balance_core::{BalanceConfig, Randomization, DEFAULT_MAX_ATTEMPTS};

use crate::command::TeamsCommand;
use crate::error::LobbyError;
use crate::roster::DEFAULT_MAX_ROSTER;

/// Lobby configuration. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LobbyConfig {
    /// Players beyond this many are left out of balancing
    pub max_roster: usize,
    /// Ceiling on optimizer restarts
    pub max_attempts: usize,
    pub randomization: Randomization,
    /// Fixed RNG seed for reproducible teams
    pub seed: Option<u64>,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            max_roster: DEFAULT_MAX_ROSTER,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            randomization: Randomization::None,
            seed: None,
        }
    }
}

impl LobbyConfig {
    pub fn load(path: &Path) -> Result<Self, LobbyError> {
        let contents = std::fs::read_to_string(path).map_err(|e| LobbyError::io(path, e))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, LobbyError> {
        Ok(toml::from_str(contents)?)
    }

    /// Balancer settings for a parsed `teams` command.
    pub fn balance_config(&self, command: &TeamsCommand) -> BalanceConfig {
        BalanceConfig {
            mode: command.mode,
            randomization: self.randomization,
            max_attempts: self.max_attempts,
            region: command.region.clone(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
