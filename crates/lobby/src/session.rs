//! One `teams` request from roster to lineup.

use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use tracing::info;

use balance_core::{Balancer, Lineup, Player};

use crate::command::TeamsCommand;
use crate::config::LobbyConfig;
use crate::roster::limit_roster;

/// Players that took part and the lineup formed from them.
#[derive(Debug, Clone)]
pub struct Session {
    pub players: Vec<Player>,
    pub lineup: Lineup,
}

/// Trim the roster to the configured size and form teams.
pub fn form_teams(players: Vec<Player>, command: &TeamsCommand, config: &LobbyConfig) -> Session {
    let players = limit_roster(players, config.max_roster);
    let balancer = Balancer::new(config.balance_config(command));

    let lineup = match config.seed {
        Some(seed) => balancer.run(&players, &mut StdRng::seed_from_u64(seed)),
        None => balancer.run(&players, &mut thread_rng()),
    };

    match &lineup.infeasible {
        Some(reason) => info!(players = players.len(), %reason, "no teams formed"),
        None => info!(
            players = players.len(),
            teams = lineup.partition.len(),
            mode = %lineup.mode,
            variance = ?lineup.variance,
            "teams formed"
        ),
    }

    Session { players, lineup }
}
