//! Team balancing for rated player pools.
//!
//! This crate provides:
//! - A conservative skill estimate from a (mean, uncertainty) rating
//! - A planner that picks team count and size bounds for a roster
//! - A multi-start local search that minimizes the variance of team averages
//! - A region-constrained variant that seeds every team with a region member
//! - A skill-blind random partitioner
//!
//! Everything here is a pure function of the roster and an injected RNG.

pub mod balancer;
pub mod evaluate;
pub mod outcome;
pub mod planner;
pub mod random;
pub mod region;
pub mod search;
pub mod skill;
pub mod types;

pub use balancer::*;
pub use evaluate::{average_skill, variance};
pub use outcome::*;
pub use planner::*;
pub use random::{random_partition, random_partition_with_region};
pub use region::{optimize_with_region, split_by_region};
pub use search::{
    optimize, Randomization, SearchOptions, SearchOutcome, SearchStats, DEFAULT_MAX_ATTEMPTS,
};
pub use skill::*;
pub use types::*;
