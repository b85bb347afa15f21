//! Skill-blind random teams.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::planner::TeamPlan;
use crate::search::{deal, empty_teams};
use crate::types::{Partition, Player, Team};

fn into_partition(teams: Vec<Vec<Player>>) -> Partition {
    Partition::new(
        teams
            .into_iter()
            .filter(|t| !t.is_empty())
            .map(Team::new)
            .collect(),
    )
}

/// Shuffle the roster and deal it round-robin across `team_count` teams.
pub fn random_partition<R: Rng + ?Sized>(
    players: &[Player],
    team_count: usize,
    rng: &mut R,
) -> Partition {
    let n = players.len();
    if n < 2 || team_count == 0 {
        return Partition::empty();
    }
    let team_count = team_count.min(n);
    if !TeamPlan::new(n, team_count).fits(n) {
        return Partition::empty();
    }

    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    let mut teams = empty_teams(team_count);
    deal(shuffled, &mut teams, false);
    into_partition(teams)
}

/// Random teams that each start with a random player from the region group.
///
/// Empty when there are no region players, no teams are requested, fewer
/// than two players overall, or the roster does not fit.
pub fn random_partition_with_region<R: Rng + ?Sized>(
    region_players: &[Player],
    other_players: &[Player],
    team_count: usize,
    rng: &mut R,
) -> Partition {
    let n = region_players.len() + other_players.len();
    if team_count == 0 || region_players.is_empty() || n < 2 {
        return Partition::empty();
    }
    let team_count = team_count.min(region_players.len());
    if !TeamPlan::new(n, team_count).fits(n) {
        return Partition::empty();
    }

    let mut anchors = region_players.to_vec();
    anchors.shuffle(rng);
    let mut pool = anchors.split_off(team_count);

    let mut teams: Vec<Vec<Player>> = empty_teams(team_count);
    for (team, anchor) in teams.iter_mut().zip(anchors) {
        team.push(anchor);
    }

    pool.extend_from_slice(other_players);
    pool.shuffle(rng);
    deal(pool, &mut teams, false);
    into_partition(teams)
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod random_tests;
