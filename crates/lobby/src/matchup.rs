//! Reporting a played match back into the roster.

use tracing::info;

use balance_core::{settle, Lineup, Rating, RatingChange, RatingUpdater, TeamResult};

use crate::error::LobbyError;
use crate::roster::Roster;

/// Mean points moved by a fully unexpected result
pub const K_FACTOR: f64 = 4.0;

/// Mean difference at which the stronger team is expected to score ~91%
pub const RATING_SCALE: f64 = 8.0;

/// Uncertainty multiplier applied after every match
pub const SIGMA_DECAY: f64 = 0.95;

/// Uncertainty never drops below this
pub const MIN_SIGMA: f64 = 1.0;

/// Elo-style update on team means.
///
/// Every pair of teams is scored like a head-to-head game (better rank wins,
/// equal ranks draw) and each player moves by their team's average change.
/// Uncertainty shrinks a little after every match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamElo {
    pub k_factor: f64,
    pub scale: f64,
    pub sigma_decay: f64,
    pub min_sigma: f64,
}

impl Default for TeamElo {
    fn default() -> Self {
        Self {
            k_factor: K_FACTOR,
            scale: RATING_SCALE,
            sigma_decay: SIGMA_DECAY,
            min_sigma: MIN_SIGMA,
        }
    }
}

impl TeamElo {
    fn expected_score(&self, mean: f64, opponent: f64) -> f64 {
        1.0 / (1.0 + 10.0_f64.powf((opponent - mean) / self.scale))
    }
}

impl RatingUpdater for TeamElo {
    fn rate(&self, groups: &[Vec<Rating>], ranks: &[usize]) -> Vec<Vec<Rating>> {
        let means: Vec<f64> = groups
            .iter()
            .map(|team| {
                if team.is_empty() {
                    0.0
                } else {
                    team.iter().map(|r| r.mu).sum::<f64>() / team.len() as f64
                }
            })
            .collect();
        let opponents = (groups.len().max(2) - 1) as f64;

        groups
            .iter()
            .enumerate()
            .map(|(i, team)| {
                let mut delta = 0.0;
                for j in 0..groups.len() {
                    if i == j {
                        continue;
                    }
                    let actual = match ranks[i].cmp(&ranks[j]) {
                        std::cmp::Ordering::Less => 1.0,
                        std::cmp::Ordering::Equal => 0.5,
                        std::cmp::Ordering::Greater => 0.0,
                    };
                    delta += actual - self.expected_score(means[i], means[j]);
                }
                let change = self.k_factor * delta / opponents;

                team.iter()
                    .map(|r| {
                        let sigma = (r.sigma * self.sigma_decay).max(self.min_sigma);
                        Rating::new(r.mu + change, sigma)
                    })
                    .collect()
            })
            .collect()
    }
}

/// Settle a match played by `lineup` and write new ratings and records into
/// the roster. The roster is left untouched when the report is invalid.
pub fn report_match<U: RatingUpdater + ?Sized>(
    roster: &mut Roster,
    lineup: &Lineup,
    results: &[TeamResult],
    updater: &U,
) -> Result<Vec<RatingChange>, LobbyError> {
    let changes = settle(&lineup.partition, results, updater)?;

    if let Some(missing) = changes
        .iter()
        .find(|c| !roster.players.iter().any(|e| e.player.id == c.player))
    {
        return Err(LobbyError::UnknownPlayer(missing.player));
    }
    for change in &changes {
        if let Some(entry) = roster.entry_mut(change.player) {
            entry.player.rating = change.after;
            entry.record(change.result);
        }
    }

    info!(
        teams = lineup.partition.len(),
        players = changes.len(),
        "recorded match"
    );
    Ok(changes)
}

#[cfg(test)]
#[path = "matchup_tests.rs"]
mod matchup_tests;
