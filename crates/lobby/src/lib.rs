//! Lobby front end for the team balancer
//!
//! This crate provides:
//! - Roster files (JSON or TOML) with per-player ratings and records
//! - Parsing of the `teams [region] [random]` command
//! - Text reports for lineups and the leaderboard
//! - Recording match results back into the roster
//!
//! # Usage
//!
//! ```bash
//! # Balanced teams from a roster
//! cargo run -p lobby -- teams roster.toml
//!
//! # Random teams, each with at least one EU player
//! cargo run -p lobby -- teams roster.toml EU random
//! ```

mod command;
mod config;
mod error;
mod matchup;
mod report;
mod roster;
mod session;

pub use command::*;
pub use config::*;
pub use error::*;
pub use matchup::*;
pub use report::*;
pub use roster::*;
pub use session::*;
