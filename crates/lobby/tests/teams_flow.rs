use std::path::PathBuf;

use balance_core::{Infeasibility, Mode, TeamResult};
use lobby::{
    form_teams, load_lineup, render_lineup, report_match, save_lineup, LobbyConfig, Roster,
    TeamElo, TeamsCommand,
};

fn write_roster(name: &str, players: usize) -> PathBuf {
    let mut toml = String::new();
    for i in 0..players {
        let region = if i % 4 == 0 { "EU" } else { "NA" };
        toml.push_str(&format!(
            "[[players]]\nid = {}\nname = \"player{}\"\nregion = \"{}\"\nmu = {:.1}\nsigma = {:.1}\n\n",
            1000 + i,
            i,
            region,
            20.0 + (i * 5 % 11) as f64,
            1.0 + (i % 3) as f64
        ));
    }
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, toml).unwrap();
    path
}

fn seeded() -> LobbyConfig {
    LobbyConfig {
        seed: Some(12),
        max_attempts: 100,
        ..Default::default()
    }
}

#[test]
fn balanced_teams_from_file() {
    let path = write_roster("lobby_flow_balanced.toml", 12);
    let roster = Roster::load(&path).unwrap();

    let session = form_teams(roster.players(), &TeamsCommand::parse(""), &seeded());

    assert_eq!(session.players.len(), 12);
    assert_eq!(session.lineup.mode, Mode::Balanced);
    assert_eq!(session.lineup.partition.len(), 3);
    assert_eq!(session.lineup.partition.player_count(), 12);
    assert!(render_lineup(&session.lineup).contains("Optimally Balanced Teams"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn seeded_runs_repeat() {
    let path = write_roster("lobby_flow_seeded.toml", 10);
    let roster = Roster::load(&path).unwrap();
    let command = TeamsCommand::parse("eu random");

    let first = form_teams(roster.players(), &command, &seeded());
    let second = form_teams(roster.players(), &command, &seeded());

    assert_eq!(first.lineup, second.lineup);
    assert!(first.lineup.partition.covers_region("EU"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn crowded_room_is_trimmed_to_twenty() {
    let path = write_roster("lobby_flow_crowded.toml", 24);
    let roster = Roster::load(&path).unwrap();

    let session = form_teams(roster.players(), &TeamsCommand::default(), &seeded());

    assert_eq!(session.players.len(), 20);
    assert_eq!(session.lineup.partition.len(), 5);
    assert_eq!(session.lineup.partition.player_count(), 20);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_region_reports_reason() {
    let path = write_roster("lobby_flow_region.toml", 8);
    let roster = Roster::load(&path).unwrap();

    let session = form_teams(roster.players(), &TeamsCommand::parse("Atlantis"), &seeded());

    assert!(session.lineup.is_empty());
    assert_eq!(
        session.lineup.infeasible,
        Some(Infeasibility::NoRegionPlayers {
            region: "Atlantis".to_string()
        })
    );
    let _ = std::fs::remove_file(&path);
}

#[test]
fn reported_match_updates_saved_roster() {
    let path = write_roster("lobby_flow_report.toml", 8);
    let roster = Roster::load(&path).unwrap();
    let session = form_teams(roster.players(), &TeamsCommand::default(), &seeded());
    assert_eq!(session.lineup.partition.len(), 2);

    let lineup_path = std::env::temp_dir().join("lobby_flow_report_lineup.json");
    save_lineup(&session.lineup, &lineup_path).unwrap();
    let lineup = load_lineup(&lineup_path).unwrap();

    let mut roster = roster;
    let results = [TeamResult::Draw, TeamResult::Draw];
    report_match(&mut roster, &lineup, &results, &TeamElo::default()).unwrap();
    roster.save(&path).unwrap();

    let reloaded = Roster::load(&path).unwrap();
    assert_eq!(reloaded.players.len(), 8);
    assert!(reloaded.players.iter().all(|e| e.draws == 1 && e.games_played() == 1));
    // Every player's uncertainty shrinks after a game
    for (before, after) in session.players.iter().zip(&reloaded.players) {
        assert_eq!(before.id, after.player.id);
        assert!(after.player.rating.sigma <= before.rating.sigma);
    }

    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(&lineup_path);
}
