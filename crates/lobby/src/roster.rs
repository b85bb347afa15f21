//! Roster files: the players in the waiting room with their ratings.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use balance_core::{Player, PlayerId, TeamResult, MAX_PLAYERS};

use crate::error::LobbyError;

/// Most players a single balancing run accepts
pub const DEFAULT_MAX_ROSTER: usize = MAX_PLAYERS;

/// A player as stored in a roster file, with their game record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(flatten)]
    pub player: Player,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
}

impl RosterEntry {
    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Count one finished match.
    pub fn record(&mut self, result: TeamResult) {
        match result {
            TeamResult::Win => self.wins += 1,
            TeamResult::Loss => self.losses += 1,
            TeamResult::Draw => self.draws += 1,
        }
    }

    /// Win rate in percent, 0 with no games.
    pub fn win_rate(&self) -> f64 {
        let games = self.games_played();
        if games == 0 {
            return 0.0;
        }
        self.wins as f64 / games as f64 * 100.0
    }
}

/// Contents of a roster file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub players: Vec<RosterEntry>,
}

impl Roster {
    /// Load a roster, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self, LobbyError> {
        let contents = std::fs::read_to_string(path).map_err(|e| LobbyError::io(path, e))?;
        let roster = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents)?,
            Some("toml") => Self::from_toml(&contents)?,
            other => {
                return Err(LobbyError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };
        debug!(path = %path.display(), players = roster.players.len(), "loaded roster");
        Ok(roster)
    }

    /// Write the roster back, in the format named by the file extension.
    pub fn save(&self, path: &Path) -> Result<(), LobbyError> {
        let contents = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(LobbyError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };
        std::fs::write(path, contents).map_err(|e| LobbyError::io(path, e))?;
        debug!(path = %path.display(), players = self.players.len(), "saved roster");
        Ok(())
    }

    pub fn entry_mut(&mut self, id: PlayerId) -> Option<&mut RosterEntry> {
        self.players.iter_mut().find(|e| e.player.id == id)
    }

    pub fn from_json(contents: &str) -> Result<Self, LobbyError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_toml(contents: &str) -> Result<Self, LobbyError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn players(&self) -> Vec<Player> {
        self.players.iter().map(|e| e.player.clone()).collect()
    }

    /// Distinct regions present in the roster, sorted.
    pub fn regions(&self) -> Vec<String> {
        regions_of(&self.players())
    }
}

/// Distinct regions of the given players, sorted.
pub fn regions_of(players: &[Player]) -> Vec<String> {
    let mut regions: Vec<String> = players.iter().map(|p| p.region.clone()).collect();
    regions.sort();
    regions.dedup();
    regions
}

/// Keep only the first `max` players.
pub fn limit_roster(mut players: Vec<Player>, max: usize) -> Vec<Player> {
    if players.len() > max {
        warn!(
            found = players.len(),
            max, "too many players, only the first ones will be balanced"
        );
        players.truncate(max);
    }
    players
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
