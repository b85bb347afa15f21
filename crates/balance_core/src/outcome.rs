//! Turning a reported match into rating updates.
//!
//! The rating math itself lives behind [`RatingUpdater`]; this module only
//! validates the report and maps it to ranks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::skill::Rating;
use crate::types::{Partition, PlayerId};

/// Result of one team in a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamResult {
    Win,
    Loss,
    Draw,
}

impl TeamResult {
    /// Rank handed to the rating updater: winners and draws share rank 0.
    pub fn rank(self) -> usize {
        match self {
            TeamResult::Win | TeamResult::Draw => 0,
            TeamResult::Loss => 1,
        }
    }
}

impl fmt::Display for TeamResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamResult::Win => f.write_str("win"),
            TeamResult::Loss => f.write_str("loss"),
            TeamResult::Draw => f.write_str("draw"),
        }
    }
}

impl FromStr for TeamResult {
    type Err = OutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "win" | "w" => Ok(TeamResult::Win),
            "loss" | "l" => Ok(TeamResult::Loss),
            "draw" | "d" => Ok(TeamResult::Draw),
            _ => Err(OutcomeError::UnknownResult(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum OutcomeError {
    #[error("expected {expected} team results, got {found}")]
    ResultCount { expected: usize, found: usize },
    #[error("only one team can win")]
    MultipleWinners,
    #[error("a loss requires a winner")]
    LossWithoutWinner,
    #[error("unknown team result: {0}")]
    UnknownResult(String),
    #[error("rating updater returned {found} ratings for team {team}, expected {expected}")]
    UpdaterShape {
        team: usize,
        expected: usize,
        found: usize,
    },
}

/// External rating model: new ratings per team given the old ones and ranks
/// (lower rank is better, equal ranks tie).
pub trait RatingUpdater {
    fn rate(&self, groups: &[Vec<Rating>], ranks: &[usize]) -> Vec<Vec<Rating>>;
}

/// Rating change of a single player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player: PlayerId,
    pub name: String,
    pub result: TeamResult,
    pub before: Rating,
    pub after: Rating,
}

/// Check a match report against the number of teams that played.
pub fn validate_results(results: &[TeamResult], team_count: usize) -> Result<(), OutcomeError> {
    if results.len() != team_count {
        return Err(OutcomeError::ResultCount {
            expected: team_count,
            found: results.len(),
        });
    }
    let wins = results.iter().filter(|r| **r == TeamResult::Win).count();
    if wins > 1 {
        return Err(OutcomeError::MultipleWinners);
    }
    if wins == 0 && results.contains(&TeamResult::Loss) {
        return Err(OutcomeError::LossWithoutWinner);
    }
    Ok(())
}

pub fn ranks(results: &[TeamResult]) -> Vec<usize> {
    results.iter().map(|r| r.rank()).collect()
}

/// Validate a report and compute every player's new rating.
pub fn settle<U: RatingUpdater + ?Sized>(
    partition: &Partition,
    results: &[TeamResult],
    updater: &U,
) -> Result<Vec<RatingChange>, OutcomeError> {
    validate_results(results, partition.len())?;

    let groups: Vec<Vec<Rating>> = partition
        .iter()
        .map(|team| team.iter().map(|p| p.rating).collect())
        .collect();
    let updated = updater.rate(&groups, &ranks(results));

    if updated.len() != groups.len() {
        return Err(OutcomeError::UpdaterShape {
            team: updated.len().min(groups.len()),
            expected: groups.len(),
            found: updated.len(),
        });
    }

    let mut changes = Vec::with_capacity(partition.player_count());
    for (idx, ((team, new_ratings), result)) in partition
        .iter()
        .zip(&updated)
        .zip(results)
        .enumerate()
    {
        if new_ratings.len() != team.len() {
            return Err(OutcomeError::UpdaterShape {
                team: idx,
                expected: team.len(),
                found: new_ratings.len(),
            });
        }
        for (player, after) in team.iter().zip(new_ratings) {
            changes.push(RatingChange {
                player: player.id,
                name: player.name.clone(),
                result: *result,
                before: player.rating,
                after: *after,
            });
        }
    }

    Ok(changes)
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
