//! Team count and size planning.
//!
//! Teams aim for four players, fall back to three and then two, and there are
//! never more than five of them.

use serde::{Deserialize, Serialize};

/// Hard cap on players per team
pub const MAX_TEAM_SIZE: usize = 4;

/// Smallest team size the planner aims for when the roster allows it
pub const MIN_TEAM_SIZE: usize = 2;

/// Hard cap on the number of teams
pub const MAX_TEAMS: usize = 5;

/// Largest roster that fits at all: five full teams
pub const MAX_PLAYERS: usize = MAX_TEAM_SIZE * MAX_TEAMS;

/// Planned team count with the resulting per-team size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPlan {
    pub team_count: usize,
    pub min_size: usize,
    pub max_size: usize,
}

impl TeamPlan {
    /// Size bounds for splitting `total_players` into `team_count` teams.
    pub fn new(total_players: usize, team_count: usize) -> Self {
        if team_count == 0 {
            return Self {
                team_count: 0,
                min_size: 0,
                max_size: 0,
            };
        }
        Self {
            team_count,
            min_size: total_players / team_count,
            max_size: total_players.div_ceil(team_count).min(MAX_TEAM_SIZE),
        }
    }

    /// Seats available across all teams.
    pub fn capacity(&self) -> usize {
        self.team_count * MAX_TEAM_SIZE
    }

    /// Whether the roster fits without breaking the per-team cap.
    pub fn fits(&self, total_players: usize) -> bool {
        self.team_count > 0 && total_players <= self.capacity()
    }
}

/// Preferred team count for a roster size before feasibility adjustments.
fn bucket(total_players: usize) -> usize {
    match total_players {
        0..=3 => 1,
        4 => 2,
        5..=6 => 3,
        7..=8 => 2,
        9..=12 => 3,
        13..=16 => 4,
        _ => 5,
    }
}

/// Region rosters start from two teams for up to eight players.
fn region_bucket(total_players: usize) -> usize {
    match total_players {
        0..=1 => 1,
        2..=8 => 2,
        9..=12 => 3,
        13..=16 => 4,
        _ => 5,
    }
}

/// At least two players per team when possible.
fn shrink(total_players: usize, mut teams: usize) -> usize {
    while teams > 1 && total_players / teams < MIN_TEAM_SIZE {
        teams -= 1;
    }
    teams
}

/// Number of teams for an unconstrained roster.
pub fn plan_team_count(total_players: usize) -> usize {
    let mut teams = shrink(total_players, bucket(total_players).min(MAX_TEAMS));

    // No more than four per team if another team is allowed
    while teams < MAX_TEAMS && total_players > teams * MAX_TEAM_SIZE {
        teams += 1;
    }
    teams
}

/// Number of teams when every team needs one player from a region.
///
/// The count never exceeds the number of region players. Returns 0 when no
/// region players are available.
pub fn plan_team_count_with_region(total_players: usize, region_players: usize) -> usize {
    if region_players == 0 {
        return 0;
    }
    let ceiling = region_players.min(MAX_TEAMS);
    shrink(total_players, region_bucket(total_players).min(ceiling))
}

/// Full plan for an unconstrained roster.
pub fn plan(total_players: usize) -> TeamPlan {
    TeamPlan::new(total_players, plan_team_count(total_players))
}

/// Full plan for a region-constrained roster.
pub fn plan_with_region(total_players: usize, region_players: usize) -> TeamPlan {
    TeamPlan::new(
        total_players,
        plan_team_count_with_region(total_players, region_players),
    )
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod planner_tests;
