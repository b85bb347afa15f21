use serde::{Deserialize, Serialize};
use std::fmt;

use crate::evaluate;
use crate::skill::Rating;

/// Region assigned to players who never set one
pub const UNKNOWN_REGION: &str = "Unknown";

fn unknown_region() -> String {
    UNKNOWN_REGION.to_string()
}

/// Opaque player identity (the chat user id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rated player as supplied by the rating store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default = "unknown_region")]
    pub region: String,
    #[serde(flatten)]
    pub rating: Rating,
}

impl Player {
    pub fn new(id: u64, name: impl Into<String>, region: impl Into<String>, rating: Rating) -> Self {
        Self {
            id: PlayerId(id),
            name: name.into(),
            region: region.into(),
            rating,
        }
    }

    /// Case-insensitive region match.
    pub fn in_region(&self, region: &str) -> bool {
        self.region.to_lowercase() == region.to_lowercase()
    }
}

/// An ordered group of players.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Mean conservative skill, 0.0 for an empty team.
    pub fn average_skill(&self) -> f64 {
        evaluate::average_skill(&self.players)
    }

    pub fn has_region(&self, region: &str) -> bool {
        self.players.iter().any(|p| p.in_region(region))
    }
}

impl<'a> IntoIterator for &'a Team {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

/// Teams covering a roster exactly once. An empty partition means no valid
/// teaming exists for the input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    pub teams: Vec<Team>,
}

impl Partition {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn empty() -> Self {
        Self { teams: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Number of teams
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Team> {
        self.teams.iter()
    }

    pub fn averages(&self) -> Vec<f64> {
        self.teams.iter().map(Team::average_skill).collect()
    }

    /// Population variance of team averages, infinite when empty.
    pub fn variance(&self) -> f64 {
        evaluate::variance(self)
    }

    /// True when every team holds at least one player from `region`.
    pub fn covers_region(&self, region: &str) -> bool {
        !self.is_empty() && self.teams.iter().all(|t| t.has_region(region))
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Team;
    type IntoIter = std::slice::Iter<'a, Team>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.iter()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
