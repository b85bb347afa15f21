//! Rating model and the conservative skill estimate.

use serde::{Deserialize, Serialize};

use crate::types::Player;

/// Starting mean for an unrated player
pub const DEFAULT_MU: f64 = 25.0;

/// Starting uncertainty for an unrated player
pub const DEFAULT_SIGMA: f64 = 8.333;

/// How many standard deviations the conservative estimate subtracts
pub const CONSERVATIVE_SIGMAS: f64 = 3.0;

/// A two-parameter skill rating: mean and uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default = "default_mu")]
    pub mu: f64,
    #[serde(default = "default_sigma")]
    pub sigma: f64,
}

fn default_mu() -> f64 {
    DEFAULT_MU
}

fn default_sigma() -> f64 {
    DEFAULT_SIGMA
}

impl Rating {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// Pessimistic point estimate, `mu - 3 * sigma`.
    pub fn conservative(&self) -> f64 {
        self.mu - CONSERVATIVE_SIGMAS * self.sigma
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::new(DEFAULT_MU, DEFAULT_SIGMA)
    }
}

/// Conservative skill of a player. This is the only quantity the balancer
/// looks at.
#[inline]
pub fn conservative_skill(player: &Player) -> f64 {
    player.rating.conservative()
}

#[cfg(test)]
#[path = "skill_tests.rs"]
mod skill_tests;
