//! Entry point tying the planner, the optimizer and the random partitioner
//! together.

use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::planner::{plan, plan_with_region, TeamPlan};
use crate::random::{random_partition, random_partition_with_region};
use crate::region::{optimize_with_region, split_by_region};
use crate::search::{optimize, Randomization, SearchOptions, SearchStats, DEFAULT_MAX_ATTEMPTS};
use crate::types::{Partition, Player};

/// Variance below which a lineup counts as excellent
pub const EXCELLENT_VARIANCE: f64 = 0.5;

/// Variance below which a lineup counts as good
pub const GOOD_VARIANCE: f64 = 2.0;

/// How teams are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Minimize the spread of team averages
    #[default]
    Balanced,
    /// Ignore skill entirely
    Random,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Balanced => f.write_str("balanced"),
            Mode::Random => f.write_str("random"),
        }
    }
}

/// Why no teams could be formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Infeasibility {
    TooFewPlayers { players: usize },
    NoTeams,
    NoRegionPlayers { region: String },
    OverCapacity { players: usize, capacity: usize },
}

impl fmt::Display for Infeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Infeasibility::TooFewPlayers { players } => {
                write!(f, "need at least 2 players, found {}", players)
            }
            Infeasibility::NoTeams => write!(f, "no teams can be formed"),
            Infeasibility::NoRegionPlayers { region } => {
                write!(f, "no players from region '{}'", region)
            }
            Infeasibility::OverCapacity { players, capacity } => {
                write!(f, "{} players do not fit into {} seats", players, capacity)
            }
        }
    }
}

/// Coarse label for how even a lineup is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceQuality {
    Excellent,
    Good,
    Fair,
}

impl BalanceQuality {
    pub fn from_variance(variance: f64) -> Self {
        if variance < EXCELLENT_VARIANCE {
            BalanceQuality::Excellent
        } else if variance < GOOD_VARIANCE {
            BalanceQuality::Good
        } else {
            BalanceQuality::Fair
        }
    }
}

impl fmt::Display for BalanceQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BalanceQuality::Excellent => "Excellent",
            BalanceQuality::Good => "Good",
            BalanceQuality::Fair => "Fair",
        };
        f.write_str(label)
    }
}

/// Balancer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceConfig {
    pub mode: Mode,
    pub randomization: Randomization,
    pub max_attempts: usize,
    /// Every team must contain a player from this region
    pub region: Option<String>,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Balanced,
            randomization: Randomization::None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            region: None,
        }
    }
}

impl BalanceConfig {
    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            max_attempts: self.max_attempts,
            randomization: self.randomization,
        }
    }
}

/// The teams handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub mode: Mode,
    pub region: Option<String>,
    pub partition: Partition,
    /// Achieved variance, balanced mode only
    pub variance: Option<f64>,
    pub infeasible: Option<Infeasibility>,
    pub stats: Option<SearchStats>,
}

impl Lineup {
    fn rejected(config: &BalanceConfig, reason: Infeasibility) -> Self {
        debug!(mode = %config.mode, %reason, "no lineup");
        Self {
            mode: config.mode,
            region: config.region.clone(),
            partition: Partition::empty(),
            variance: None,
            infeasible: Some(reason),
            stats: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.partition.is_empty()
    }

    /// Quality label, balanced mode only.
    pub fn quality(&self) -> Option<BalanceQuality> {
        self.variance.map(BalanceQuality::from_variance)
    }

    /// Lowest and highest team average, when there is more than one team.
    pub fn spread(&self) -> Option<(f64, f64)> {
        if self.partition.len() < 2 {
            return None;
        }
        let averages = self.partition.averages();
        let min = averages.iter().copied().fold(f64::INFINITY, f64::min);
        let max = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

/// Plans team counts and dispatches to the right partitioner.
#[derive(Debug, Clone, Default)]
pub struct Balancer {
    config: BalanceConfig,
}

impl Balancer {
    pub fn new(config: BalanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BalanceConfig {
        &self.config
    }

    /// Form teams from `players`. Infeasible rosters give an empty lineup
    /// with the reason attached.
    pub fn run<R: Rng + ?Sized>(&self, players: &[Player], rng: &mut R) -> Lineup {
        let n = players.len();
        if n < 2 {
            return Lineup::rejected(&self.config, Infeasibility::TooFewPlayers { players: n });
        }

        match self.config.region.as_deref() {
            Some(region) => self.run_with_region(players, region, rng),
            None => self.run_open(players, rng),
        }
    }

    fn run_open<R: Rng + ?Sized>(&self, players: &[Player], rng: &mut R) -> Lineup {
        let n = players.len();
        let plan = plan(n);
        if let Some(reason) = self.over_capacity(&plan, n) {
            return Lineup::rejected(&self.config, reason);
        }
        let team_count = plan.team_count;
        debug!(
            players = n,
            teams = team_count,
            min_size = plan.min_size,
            max_size = plan.max_size,
            mode = %self.config.mode,
            "planned teams"
        );

        match self.config.mode {
            Mode::Random => self.accept(random_partition(players, team_count, rng), None),
            Mode::Balanced => {
                let outcome = optimize(players, team_count, &self.config.search_options(), rng);
                self.accept(outcome.partition, Some(outcome.stats))
            }
        }
    }

    fn run_with_region<R: Rng + ?Sized>(
        &self,
        players: &[Player],
        region: &str,
        rng: &mut R,
    ) -> Lineup {
        let n = players.len();
        let (members, others) = split_by_region(players, region);
        if members.is_empty() {
            return Lineup::rejected(
                &self.config,
                Infeasibility::NoRegionPlayers {
                    region: region.to_string(),
                },
            );
        }

        let plan = plan_with_region(n, members.len());
        if plan.team_count == 0 {
            return Lineup::rejected(&self.config, Infeasibility::NoTeams);
        }
        if let Some(reason) = self.over_capacity(&plan, n) {
            return Lineup::rejected(&self.config, reason);
        }
        let team_count = plan.team_count;
        debug!(
            players = n,
            region,
            region_players = members.len(),
            teams = team_count,
            mode = %self.config.mode,
            "planned region teams"
        );

        match self.config.mode {
            Mode::Random => self.accept(
                random_partition_with_region(&members, &others, team_count, rng),
                None,
            ),
            Mode::Balanced => {
                let outcome = optimize_with_region(
                    players,
                    region,
                    team_count,
                    &self.config.search_options(),
                    rng,
                );
                self.accept(outcome.partition, Some(outcome.stats))
            }
        }
    }

    fn over_capacity(&self, plan: &TeamPlan, players: usize) -> Option<Infeasibility> {
        if plan.fits(players) {
            return None;
        }
        Some(Infeasibility::OverCapacity {
            players,
            capacity: plan.capacity(),
        })
    }

    fn accept(&self, partition: Partition, stats: Option<SearchStats>) -> Lineup {
        if partition.is_empty() {
            return Lineup::rejected(&self.config, Infeasibility::NoTeams);
        }
        let variance = match self.config.mode {
            Mode::Balanced => Some(partition.variance()),
            Mode::Random => None,
        };
        Lineup {
            mode: self.config.mode,
            region: self.config.region.clone(),
            partition,
            variance,
            infeasible: None,
            stats,
        }
    }
}

/// Balanced teams with default settings.
pub fn balance(players: &[Player]) -> Lineup {
    Balancer::default().run(players, &mut thread_rng())
}

/// Balanced teams in which every team has a player from `region`.
pub fn balance_with_region(players: &[Player], region: &str) -> Lineup {
    Balancer::new(BalanceConfig {
        region: Some(region.to_string()),
        ..Default::default()
    })
    .run(players, &mut thread_rng())
}

#[cfg(test)]
#[path = "balancer_tests.rs"]
mod balancer_tests;
