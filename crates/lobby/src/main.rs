//! Lobby CLI
//!
//! Build teams from a roster file, record match results and show the
//! leaderboard.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use balance_core::{Randomization, TeamResult};
use lobby::{
    form_teams, leaderboard, load_lineup, render_infeasible, render_leaderboard, render_lineup,
    render_match, report_match, save_lineup, LobbyConfig, LobbyError, Roster, TeamElo,
    TeamsCommand, DEFAULT_LEADERBOARD_LIMIT,
};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Lobby team balancer");
    println!();
    println!("Usage:");
    println!("  lobby teams <roster> [region] [random] [options]");
    println!("  lobby report <roster> <lineup.json> <win|loss|draw>... [--out <path>]");
    println!("  lobby leaderboard <roster> [--limit N]");
    println!();
    println!("Options:");
    println!("  --config <path>    TOML settings file");
    println!("  --seed <n>         Fixed RNG seed");
    println!("  --attempts <n>     Ceiling on optimizer restarts");
    println!("  --aggressive       Shuffle large skill tiers between restarts");
    println!("  --out <path>       Write the lineup as JSON (teams) or the updated");
    println!("                     roster (report, defaults to the input roster)");
    println!();
    println!("Rosters are .json or .toml files with a `players` list.");
    println!();
    println!("Examples:");
    println!("  lobby teams roster.toml");
    println!("  lobby teams roster.toml EU random --seed 7");
    println!("  lobby teams roster.toml --out lineup.json");
    println!("  lobby report roster.toml lineup.json win loss");
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, LobbyError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| LobbyError::InvalidArgument(format!("{} needs a value", flag)))
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, LobbyError> {
    value
        .parse()
        .map_err(|_| LobbyError::InvalidArgument(format!("{} expects a number, got {}", flag, value)))
}

fn run_teams(args: &[String]) -> Result<(), LobbyError> {
    let roster_path = args
        .first()
        .ok_or_else(|| LobbyError::InvalidArgument("teams requires a roster file".to_string()))?;

    let mut words = Vec::new();
    let mut config_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut attempts: Option<usize> = None;
    let mut aggressive = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                config_path = Some(PathBuf::from(flag_value(args, i, "--config")?));
                i += 1;
            }
            "--out" | "-o" => {
                out_path = Some(PathBuf::from(flag_value(args, i, "--out")?));
                i += 1;
            }
            "--seed" | "-s" => {
                seed = Some(parse_number(flag_value(args, i, "--seed")?, "--seed")?);
                i += 1;
            }
            "--attempts" | "-a" => {
                attempts = Some(parse_number(flag_value(args, i, "--attempts")?, "--attempts")?);
                i += 1;
            }
            "--aggressive" => aggressive = true,
            word => words.push(word.to_string()),
        }
        i += 1;
    }

    let mut config = match &config_path {
        Some(path) => LobbyConfig::load(path)?,
        None => LobbyConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(attempts) = attempts {
        config.max_attempts = attempts;
    }
    if aggressive {
        config.randomization = Randomization::Aggressive;
    }

    let command = TeamsCommand::from_args(&words);
    let roster = Roster::load(Path::new(roster_path))?;
    let session = form_teams(roster.players(), &command, &config);

    if session.lineup.is_empty() {
        print!("{}", render_infeasible(&session.lineup, &session.players));
    } else {
        print!("{}", render_lineup(&session.lineup));
    }

    if let Some(path) = out_path {
        save_lineup(&session.lineup, &path)?;
        println!("Lineup written to {}", path.display());
    }
    Ok(())
}

fn run_report(args: &[String]) -> Result<(), LobbyError> {
    let (roster_path, lineup_path) = match args {
        [roster, lineup, ..] => (PathBuf::from(roster), PathBuf::from(lineup)),
        _ => {
            return Err(LobbyError::InvalidArgument(
                "report requires a roster file and a lineup file".to_string(),
            ))
        }
    };

    let mut results = Vec::new();
    let mut out_path = roster_path.clone();
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                out_path = PathBuf::from(flag_value(args, i, "--out")?);
                i += 1;
            }
            word => results.push(word.parse::<TeamResult>()?),
        }
        i += 1;
    }

    let mut roster = Roster::load(&roster_path)?;
    let lineup = load_lineup(&lineup_path)?;
    let changes = report_match(&mut roster, &lineup, &results, &TeamElo::default())?;
    roster.save(&out_path)?;

    print!("{}", render_match(&lineup, &results, &changes));
    println!("Roster written to {}", out_path.display());
    Ok(())
}

fn show_leaderboard(args: &[String]) -> Result<(), LobbyError> {
    let roster_path = args.first().ok_or_else(|| {
        LobbyError::InvalidArgument("leaderboard requires a roster file".to_string())
    })?;

    let mut limit = DEFAULT_LEADERBOARD_LIMIT;
    let mut i = 1;
    while i < args.len() {
        if matches!(args[i].as_str(), "--limit" | "-n") {
            limit = parse_number(flag_value(args, i, "--limit")?, "--limit")?;
            i += 1;
        }
        i += 1;
    }

    let roster = Roster::load(Path::new(roster_path))?;
    print!("{}", render_leaderboard(&leaderboard(&roster.players, limit)));
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = match args[1].as_str() {
        "teams" => run_teams(&args[2..]),
        "report" => run_report(&args[2..]),
        "leaderboard" | "lb" => show_leaderboard(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(LobbyError::UnknownCommand(other.to_string())),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, LobbyError::UnknownCommand(_) | LobbyError::InvalidArgument(_)) {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
