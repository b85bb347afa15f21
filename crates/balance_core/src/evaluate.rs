//! Balance objective: variance of per-team average skill.

use crate::skill::conservative_skill;
use crate::types::{Partition, Player};

/// Mean conservative skill of a team, 0.0 when empty.
pub fn average_skill(team: &[Player]) -> f64 {
    if team.is_empty() {
        return 0.0;
    }
    team.iter().map(conservative_skill).sum::<f64>() / team.len() as f64
}

/// Population variance of team averages. Lower is better; an empty partition
/// scores infinity.
pub fn variance(partition: &Partition) -> f64 {
    population_variance(&partition.averages())
}

pub(crate) fn population_variance(averages: &[f64]) -> f64 {
    if averages.is_empty() {
        return f64::INFINITY;
    }
    let n = averages.len() as f64;
    let mean = averages.iter().sum::<f64>() / n;
    averages.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / n
}

/// Team averages over roster indices, kept in sync with a candidate draft.
///
/// A swap only touches two teams, so only those two averages are recomputed.
/// Each average is summed over members in order, which gives the same value
/// as recomputing the whole partition.
pub(crate) struct TeamAverages<'a> {
    skills: &'a [f64],
    averages: Vec<f64>,
}

impl<'a> TeamAverages<'a> {
    pub(crate) fn new(skills: &'a [f64], teams: &[Vec<usize>]) -> Self {
        let mut averages = Self {
            skills,
            averages: vec![0.0; teams.len()],
        };
        for (idx, team) in teams.iter().enumerate() {
            averages.refresh(idx, team);
        }
        averages
    }

    pub(crate) fn get(&self, team: usize) -> f64 {
        self.averages[team]
    }

    pub(crate) fn set(&mut self, team: usize, average: f64) {
        self.averages[team] = average;
    }

    pub(crate) fn refresh(&mut self, team: usize, members: &[usize]) {
        self.averages[team] = if members.is_empty() {
            0.0
        } else {
            members.iter().map(|&p| self.skills[p]).sum::<f64>() / members.len() as f64
        };
    }

    pub(crate) fn variance(&self) -> f64 {
        population_variance(&self.averages)
    }
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod evaluate_tests;
