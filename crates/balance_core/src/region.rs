//! Region-constrained balancing.
//!
//! Every team is seeded with one player from the required region (its
//! anchor, kept at index 0). The rest of the roster is dealt and climbed like
//! an unconstrained search, except that anchors never take part in swaps.

use rand::Rng;
use tracing::debug;

use crate::planner::{TeamPlan, MAX_TEAM_SIZE};
use crate::search::{
    attempt_budget, best_of, deal, finish, skills_of, sorted_by_skill, tier_shuffle,
    SearchOptions, SearchOutcome, Tiers,
};
use crate::types::Player;

/// Split a roster into players from `region` (case-insensitive) and the rest,
/// keeping roster order within each group.
pub fn split_by_region(players: &[Player], region: &str) -> (Vec<Player>, Vec<Player>) {
    players.iter().cloned().partition(|p| p.in_region(region))
}

/// Balanced teams in which every team holds a player from `region`.
///
/// Empty when fewer than two players are given, no teams are requested, no
/// player is from the region, or the roster does not fit. The team count is
/// lowered to the number of region players when it exceeds it.
pub fn optimize_with_region<R: Rng + ?Sized>(
    players: &[Player],
    region: &str,
    team_count: usize,
    options: &SearchOptions,
    rng: &mut R,
) -> SearchOutcome {
    let n = players.len();
    if n < 2 || team_count == 0 {
        return SearchOutcome::infeasible();
    }

    let (anchors, others): (Vec<usize>, Vec<usize>) =
        (0..n).partition(|&i| players[i].in_region(region));
    if anchors.is_empty() {
        debug!(region, "no players from required region");
        return SearchOutcome::infeasible();
    }

    let team_count = team_count.min(anchors.len());
    if !TeamPlan::new(n, team_count).fits(n) {
        return SearchOutcome::infeasible();
    }

    let skills = skills_of(players);
    let anchors = sorted_by_skill(&skills, anchors);
    let others = sorted_by_skill(&skills, others);

    let attempts = attempt_budget(options.max_attempts, if n > 12 { 100 } else { 200 });
    let max_passes = if n - team_count <= 8 { 150 } else { 75 };
    let randomization = options.randomization;

    let best = best_of(attempts, &skills, 1, max_passes, |attempt| {
        let shuffle = randomization.shuffles(attempt);

        let mut seeds = anchors.clone();
        if shuffle {
            let tier = randomization.tier_size(seeds.len(), Tiers::Anchors);
            tier_shuffle(&mut seeds, tier, rng);
        }
        let mut teams: Vec<Vec<usize>> = seeds[..team_count]
            .iter()
            .map(|&anchor| {
                let mut team = Vec::with_capacity(MAX_TEAM_SIZE);
                team.push(anchor);
                team
            })
            .collect();

        let pool: Vec<usize> = seeds[team_count..]
            .iter()
            .chain(others.iter())
            .copied()
            .collect();
        let mut pool = sorted_by_skill(&skills, pool);
        if shuffle && !pool.is_empty() {
            let tier = randomization.tier_size(pool.len(), Tiers::Roster);
            tier_shuffle(&mut pool, tier, rng);
        }

        deal(pool, &mut teams, true);
        teams
    });

    let outcome = finish(players, best);
    debug!(
        players = n,
        region,
        teams = outcome.partition.len(),
        attempts = outcome.stats.attempts,
        variance = outcome.variance,
        "balanced roster with region anchors"
    );
    outcome
}

#[cfg(test)]
#[path = "region_tests.rs"]
mod region_tests;
