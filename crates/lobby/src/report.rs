//! Text reports for lineups and the leaderboard

use std::path::Path;

use balance_core::{
    conservative_skill, split_by_region, Infeasibility, Lineup, Mode, Player, RatingChange,
    TeamResult, MAX_TEAMS, MAX_TEAM_SIZE,
};

use crate::error::LobbyError;
use crate::roster::{regions_of, RosterEntry};

/// Number of leaderboard rows shown by default
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 20;

fn title(lineup: &Lineup) -> &'static str {
    match (lineup.mode, lineup.region.is_some()) {
        (Mode::Random, true) => "Random Region-Based Teams",
        (Mode::Random, false) => "Completely Random Teams",
        (Mode::Balanced, true) => "Region-Based Balanced Teams",
        (Mode::Balanced, false) => "Optimally Balanced Teams",
    }
}

fn player_line(player: &Player, lineup: &Lineup) -> String {
    let marker = match &lineup.region {
        Some(region) if player.in_region(region) => " *",
        _ => "",
    };
    match lineup.mode {
        Mode::Balanced => format!(
            "  - {} ({:.1}) [{}]{}\n",
            player.name,
            conservative_skill(player),
            player.region,
            marker
        ),
        Mode::Random => format!("  - {} [{}]{}\n", player.name, player.region, marker),
    }
}

/// Render a non-empty lineup.
pub fn render_lineup(lineup: &Lineup) -> String {
    let mut report = String::new();
    let teams = lineup.partition.len();
    let players = lineup.partition.player_count();

    report.push_str(&format!("=== {} ===\n", title(lineup)));
    let kind = match lineup.mode {
        Mode::Balanced => "balanced",
        Mode::Random => "completely random",
    };
    report.push_str(&format!("Created {} {} teams from {} players\n", teams, kind, players));
    if let Some(region) = &lineup.region {
        report.push_str(&format!("Each team has at least one '{}' player\n", region));
    }
    if lineup.mode == Mode::Random {
        report.push_str("Teams are randomized (ignoring ratings)\n");
    }
    report.push_str(&format!(
        "Max {} players per team | Max {} teams total\n\n",
        MAX_TEAM_SIZE, MAX_TEAMS
    ));

    for (i, team) in lineup.partition.iter().enumerate() {
        match lineup.mode {
            Mode::Balanced => report.push_str(&format!(
                "Team {} (Avg: {:.1})\n",
                i + 1,
                team.average_skill()
            )),
            Mode::Random => {
                report.push_str(&format!("Team {} ({} players)\n", i + 1, team.len()))
            }
        }
        for player in team {
            report.push_str(&player_line(player, lineup));
        }
        report.push('\n');
    }

    if let (Some(quality), Some((min, max))) = (lineup.quality(), lineup.spread()) {
        report.push_str(&format!("Balance Quality: {}\n", quality));
        report.push_str(&format!("Range: {:.1} - {:.1}\n", min, max));
        report.push_str(&format!("Difference: {:.1}\n", max - min));
    }

    report
}

/// Explain why no lineup could be formed from `players`.
pub fn render_infeasible(lineup: &Lineup, players: &[Player]) -> String {
    let mut report = String::new();
    match (&lineup.infeasible, &lineup.region) {
        (Some(Infeasibility::TooFewPlayers { .. }), _) => {
            report.push_str("Need at least 2 players to create teams.\n");
        }
        (Some(reason), Some(region)) => {
            let (members, _) = split_by_region(players, region);
            report.push_str(&format!(
                "Cannot create teams with region requirement '{}': {}.\n",
                region, reason
            ));
            report.push_str(&format!(
                "Found {} players from '{}' region.\n",
                members.len(),
                region
            ));
            let regions = regions_of(players);
            if !regions.is_empty() {
                report.push_str(&format!("Available regions: {}\n", regions.join(", ")));
            }
        }
        (Some(reason), None) => {
            report.push_str(&format!("Unable to balance players into teams: {}.\n", reason));
        }
        (None, _) => report.push_str("Unable to balance players into teams.\n"),
    }
    report
}

/// Save a lineup as pretty JSON
pub fn save_lineup(lineup: &Lineup, path: &Path) -> Result<(), LobbyError> {
    let json = serde_json::to_string_pretty(lineup)?;
    std::fs::write(path, json).map_err(|e| LobbyError::io(path, e))
}

pub fn load_lineup(path: &Path) -> Result<Lineup, LobbyError> {
    let contents = std::fs::read_to_string(path).map_err(|e| LobbyError::io(path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Summarize rating changes after a reported match, team by team.
pub fn render_match(lineup: &Lineup, results: &[TeamResult], changes: &[RatingChange]) -> String {
    let mut report = String::new();
    report.push_str("=== Match Results Submitted ===\n");
    for (i, (team, result)) in lineup.partition.iter().zip(results).enumerate() {
        report.push_str(&format!("Team {} ({})\n", i + 1, result));
        for player in team {
            if let Some(change) = changes.iter().find(|c| c.player == player.id) {
                report.push_str(&format!(
                    "  - {}: {:.1} -> {:.1}\n",
                    change.name, change.before.mu, change.after.mu
                ));
            }
        }
        report.push('\n');
    }
    report
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub rank: usize,
    pub name: String,
    pub skill: f64,
    pub games: u32,
    pub win_rate: f64,
}

/// Players sorted by conservative skill, best first.
pub fn leaderboard(entries: &[RosterEntry], limit: usize) -> Vec<Standing> {
    let mut sorted: Vec<&RosterEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        conservative_skill(&b.player).total_cmp(&conservative_skill(&a.player))
    });
    sorted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, entry)| Standing {
            rank: i + 1,
            name: entry.player.name.clone(),
            skill: conservative_skill(&entry.player),
            games: entry.games_played(),
            win_rate: entry.win_rate(),
        })
        .collect()
}

pub fn render_leaderboard(standings: &[Standing]) -> String {
    if standings.is_empty() {
        return "No players found in the roster.\n".to_string();
    }
    let mut report = String::new();
    report.push_str("=== Leaderboard ===\n");
    report.push_str(&format!(
        "{:<5} {:<24} {:>8} {:>8} {:>8}\n",
        "Rank", "Player", "Skill", "Games", "WR%"
    ));
    report.push_str(&"-".repeat(57));
    report.push('\n');
    for s in standings {
        report.push_str(&format!(
            "{:<5} {:<24} {:>8.1} {:>8} {:>8.1}\n",
            s.rank, s.name, s.skill, s.games, s.win_rate
        ));
    }
    report
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
