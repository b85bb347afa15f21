//! Multi-start local search for balanced teams.
//!
//! Each attempt orders the roster by skill, optionally shuffles within skill
//! tiers, deals players out in a snake draft and then hill-climbs with
//! pairwise swaps between teams. The best attempt wins; ties keep the
//! earliest one.
//!
//! The same engine drives the region-constrained variant: it seeds each team
//! with an anchor at index 0 and asks the climber to leave that slot alone.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::evaluate::TeamAverages;
use crate::planner::{TeamPlan, MAX_TEAM_SIZE};
use crate::skill::conservative_skill;
use crate::types::{Partition, Player, Team};

/// Default ceiling on restarts
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// How much the seed ordering is shuffled between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Randomization {
    /// First attempt uses the sorted order, later ones shuffle small tiers
    #[default]
    None,
    /// Every attempt shuffles small tiers
    Standard,
    /// Every attempt shuffles large tiers
    Aggressive,
}

/// Which list a tier shuffle is applied to. Anchors are usually few, so they
/// get proportionally larger tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tiers {
    Roster,
    Anchors,
}

impl Randomization {
    /// Whether the seed ordering of this attempt gets shuffled.
    pub(crate) fn shuffles(self, attempt: usize) -> bool {
        attempt > 0 || self != Randomization::None
    }

    pub(crate) fn tier_size(self, len: usize, tiers: Tiers) -> usize {
        let (standard, aggressive) = match tiers {
            Tiers::Roster => (4, 3),
            Tiers::Anchors => (3, 2),
        };
        match self {
            Randomization::Aggressive => (len / aggressive).max(2),
            _ => (len / standard).max(1),
        }
    }
}

impl fmt::Display for Randomization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Randomization::None => "none",
            Randomization::Standard => "standard",
            Randomization::Aggressive => "aggressive",
        };
        f.write_str(name)
    }
}

impl FromStr for Randomization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "off" => Ok(Randomization::None),
            "standard" | "on" => Ok(Randomization::Standard),
            "aggressive" => Ok(Randomization::Aggressive),
            other => Err(format!("unknown randomization level: {}", other)),
        }
    }
}

/// Search parameters supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Upper bound on restarts; the roster size may lower it further
    pub max_attempts: usize,
    pub randomization: Randomization,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            randomization: Randomization::None,
        }
    }
}

/// Bookkeeping across attempts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Attempts actually run
    pub attempts: usize,
    /// Variance reached by the first attempt
    pub first_variance: f64,
    /// Variance of the returned partition
    pub best_variance: f64,
    /// Index of the attempt that produced the result
    pub best_attempt: usize,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self {
            attempts: 0,
            first_variance: f64::INFINITY,
            best_variance: f64::INFINITY,
            best_attempt: 0,
        }
    }
}

/// Result of a search. An empty partition means the input was infeasible.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub partition: Partition,
    pub variance: f64,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn infeasible() -> Self {
        Self {
            partition: Partition::empty(),
            variance: f64::INFINITY,
            stats: SearchStats::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.partition.is_empty()
    }
}

/// Split a roster into balanced teams.
///
/// Returns an empty outcome when fewer than two players are given, no teams
/// are requested, or the roster does not fit into `team_count` full teams.
/// More teams than players are reduced to one team per player.
pub fn optimize<R: Rng + ?Sized>(
    players: &[Player],
    team_count: usize,
    options: &SearchOptions,
    rng: &mut R,
) -> SearchOutcome {
    let n = players.len();
    if n < 2 || team_count == 0 {
        return SearchOutcome::infeasible();
    }
    let team_count = team_count.min(n);
    if !TeamPlan::new(n, team_count).fits(n) {
        return SearchOutcome::infeasible();
    }

    let skills = skills_of(players);
    let sorted = sorted_by_skill(&skills, (0..n).collect());
    let attempts = attempt_budget(options.max_attempts, if n <= 12 { 1000 } else { 500 });
    let max_passes = if n <= 8 { 200 } else { 100 };
    let randomization = options.randomization;

    let best = best_of(attempts, &skills, 0, max_passes, |attempt| {
        let mut order = sorted.clone();
        if randomization.shuffles(attempt) {
            tier_shuffle(&mut order, randomization.tier_size(n, Tiers::Roster), rng);
        }
        let mut teams = empty_teams(team_count);
        deal(order, &mut teams, true);
        teams
    });

    let outcome = finish(players, best);
    debug!(
        players = n,
        teams = outcome.partition.len(),
        attempts = outcome.stats.attempts,
        variance = outcome.variance,
        "balanced roster"
    );
    outcome
}

pub(crate) fn skills_of(players: &[Player]) -> Vec<f64> {
    players.iter().map(conservative_skill).collect()
}

/// Indices ordered by descending skill, stable for equal skills.
pub(crate) fn sorted_by_skill(skills: &[f64], mut indices: Vec<usize>) -> Vec<usize> {
    indices.sort_by(|&a, &b| skills[b].total_cmp(&skills[a]));
    indices
}

pub(crate) fn attempt_budget(ceiling: usize, for_size: usize) -> usize {
    ceiling.min(for_size).max(1)
}

pub(crate) fn empty_teams<T>(team_count: usize) -> Vec<Vec<T>> {
    (0..team_count)
        .map(|_| Vec::with_capacity(MAX_TEAM_SIZE))
        .collect()
}

/// Shuffle within contiguous blocks of `tier` entries.
pub(crate) fn tier_shuffle<T, R: Rng + ?Sized>(order: &mut [T], tier: usize, rng: &mut R) {
    for block in order.chunks_mut(tier.max(1)) {
        block.shuffle(rng);
    }
}

/// Deal players out across teams.
///
/// With `snake` the direction reverses every round, otherwise it is plain
/// round-robin. A player whose slot is already full goes to the next team in
/// the dealing direction that has room. Callers check capacity beforehand, so
/// every player finds a seat.
pub(crate) fn deal<T>(order: impl IntoIterator<Item = T>, teams: &mut [Vec<T>], snake: bool) {
    let k = teams.len();
    if k == 0 {
        return;
    }
    for (i, player) in order.into_iter().enumerate() {
        let forward = !snake || (i / k) % 2 == 0;
        let slot = if forward { i % k } else { k - 1 - i % k };
        let seat = (0..k)
            .map(|step| {
                if forward {
                    (slot + step) % k
                } else {
                    (slot + k - step) % k
                }
            })
            .find(|&idx| teams[idx].len() < MAX_TEAM_SIZE);
        debug_assert!(seat.is_some(), "dealt past team capacity");
        if let Some(idx) = seat {
            teams[idx].push(player);
        }
    }
}

fn swap_members(teams: &mut [Vec<usize>], i: usize, a: usize, j: usize, b: usize) {
    debug_assert!(i < j);
    let (left, right) = teams.split_at_mut(j);
    std::mem::swap(&mut left[i][a], &mut right[0][b]);
}

/// Greedy pairwise-swap improvement.
///
/// The first `locked` members of every team never move. A swap is kept only
/// if it strictly lowers the variance. Stops after a pass with no accepted
/// swap or after `max_passes` passes. Returns the final variance.
pub(crate) fn hill_climb(
    teams: &mut [Vec<usize>],
    skills: &[f64],
    locked: usize,
    max_passes: usize,
) -> f64 {
    let k = teams.len();
    let mut averages = TeamAverages::new(skills, teams);
    let mut current = averages.variance();

    let mut improved = true;
    let mut passes = 0;
    while improved && passes < max_passes {
        improved = false;
        passes += 1;

        for i in 0..k {
            for j in (i + 1)..k {
                if teams[i].len() <= locked || teams[j].len() <= locked {
                    continue;
                }
                for a in locked..teams[i].len() {
                    for b in locked..teams[j].len() {
                        let (old_i, old_j) = (averages.get(i), averages.get(j));
                        swap_members(teams, i, a, j, b);
                        averages.refresh(i, &teams[i]);
                        averages.refresh(j, &teams[j]);

                        let candidate = averages.variance();
                        if candidate < current {
                            current = candidate;
                            improved = true;
                        } else {
                            swap_members(teams, i, a, j, b);
                            averages.set(i, old_i);
                            averages.set(j, old_j);
                        }
                    }
                }
            }
        }
    }

    current
}

/// Run `attempts` independent seed-and-climb rounds and keep the best.
pub(crate) fn best_of<F>(
    attempts: usize,
    skills: &[f64],
    locked: usize,
    max_passes: usize,
    mut seed: F,
) -> Option<(Vec<Vec<usize>>, SearchStats)>
where
    F: FnMut(usize) -> Vec<Vec<usize>>,
{
    let mut stats = SearchStats::default();
    let mut best = None;

    for attempt in 0..attempts {
        let mut teams = seed(attempt);
        let variance = hill_climb(&mut teams, skills, locked, max_passes);
        trace!(attempt, variance, "attempt finished");

        if attempt == 0 {
            stats.first_variance = variance;
        }
        stats.attempts += 1;
        if variance < stats.best_variance {
            stats.best_variance = variance;
            stats.best_attempt = attempt;
            best = Some(teams);
        }
    }

    best.map(|teams| (teams, stats))
}

/// Materialize index teams into a partition, dropping empty teams.
pub(crate) fn into_partition(players: &[Player], teams: Vec<Vec<usize>>) -> Partition {
    Partition::new(
        teams
            .into_iter()
            .filter(|team| !team.is_empty())
            .map(|team| Team::new(team.into_iter().map(|p| players[p].clone()).collect()))
            .collect(),
    )
}

pub(crate) fn finish(
    players: &[Player],
    best: Option<(Vec<Vec<usize>>, SearchStats)>,
) -> SearchOutcome {
    match best {
        Some((teams, stats)) => {
            let partition = into_partition(players, teams);
            let variance = partition.variance();
            SearchOutcome {
                partition,
                variance,
                stats,
            }
        }
        None => SearchOutcome::infeasible(),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
