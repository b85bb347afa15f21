use super::*;
use crate::skill::Rating;
use crate::types::PlayerId;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn roster(skills: &[f64]) -> Vec<Player> {
    skills
        .iter()
        .enumerate()
        .map(|(i, &s)| Player::new(i as u64, format!("p{i}"), "Unknown", Rating::new(s, 0.0)))
        .collect()
}

fn ids(partition: &Partition) -> Vec<PlayerId> {
    let mut ids: Vec<_> = partition.iter().flat_map(|t| t.iter().map(|p| p.id)).collect();
    ids.sort();
    ids
}

#[test]
fn test_reference_eight_players() {
    let players = roster(&[30.0, 28.0, 26.0, 24.0, 22.0, 20.0, 18.0, 16.0]);
    let mut rng = StdRng::seed_from_u64(7);

    let outcome = optimize(&players, 2, &SearchOptions::default(), &mut rng);

    assert_eq!(outcome.partition.len(), 2);
    assert!(outcome.partition.iter().all(|t| t.len() == 4));

    let naive = Partition::new(vec![
        Team::new(players[..4].to_vec()),
        Team::new(players[4..].to_vec()),
    ]);
    assert!(outcome.variance <= naive.variance());
    // The snake draft alone already splits 92/92
    assert_eq!(outcome.variance, 0.0);
    assert_eq!(outcome.stats.best_attempt, 0);
}

#[test]
fn test_covers_roster_exactly_once() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in 2..=20 {
        let skills: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..40.0)).collect();
        let players = roster(&skills);
        let teams = crate::planner::plan_team_count(n);

        let outcome = optimize(&players, teams, &SearchOptions::default(), &mut rng);

        let expected: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        assert_eq!(ids(&outcome.partition), expected, "roster of {n}");
        for team in &outcome.partition {
            assert!((1..=MAX_TEAM_SIZE).contains(&team.len()));
        }
    }
}

#[test]
fn test_best_never_worse_than_first_attempt() {
    let mut rng = StdRng::seed_from_u64(3);
    let skills: Vec<f64> = (0..14).map(|_| rng.gen_range(-5.0..35.0)).collect();
    let players = roster(&skills);

    let options = SearchOptions {
        max_attempts: 50,
        randomization: Randomization::Aggressive,
    };
    let outcome = optimize(&players, 4, &options, &mut rng);

    assert_eq!(outcome.stats.attempts, 50);
    assert!(outcome.stats.best_variance <= outcome.stats.first_variance);
    assert!((outcome.variance - outcome.stats.best_variance).abs() < 1e-9);
}

#[test]
fn test_infeasible_inputs_are_empty() {
    let mut rng = StdRng::seed_from_u64(0);
    let options = SearchOptions::default();

    assert!(optimize(&[], 2, &options, &mut rng).is_empty());
    assert!(optimize(&roster(&[10.0]), 1, &options, &mut rng).is_empty());
    assert!(optimize(&roster(&[10.0, 12.0]), 0, &options, &mut rng).is_empty());

    // Nine players cannot fit two teams of four
    let nine = roster(&[1.0; 9]);
    let outcome = optimize(&nine, 2, &options, &mut rng);
    assert!(outcome.is_empty());
    assert_eq!(outcome.variance, f64::INFINITY);
}

#[test]
fn test_more_teams_than_players() {
    let mut rng = StdRng::seed_from_u64(5);
    let outcome = optimize(&roster(&[10.0, 20.0, 30.0]), 5, &SearchOptions::default(), &mut rng);
    assert_eq!(outcome.partition.len(), 3);
    assert!(outcome.partition.iter().all(|t| t.len() == 1));
}

#[test]
fn test_same_seed_same_teams() {
    let players = roster(&[31.0, 12.0, 25.0, 8.0, 19.0, 22.0, 14.0, 27.0, 9.0, 16.0]);
    let options = SearchOptions {
        max_attempts: 40,
        randomization: Randomization::Standard,
    };

    let a = optimize(&players, 3, &options, &mut StdRng::seed_from_u64(99));
    let b = optimize(&players, 3, &options, &mut StdRng::seed_from_u64(99));
    assert_eq!(a.partition, b.partition);
}

#[test]
fn test_snake_deal_alternates_direction() {
    let mut teams = empty_teams(3);
    deal(0..6usize, &mut teams, true);
    assert_eq!(teams, vec![vec![0, 5], vec![1, 4], vec![2, 3]]);
}

#[test]
fn test_round_robin_deal() {
    let mut teams = empty_teams(3);
    deal(0..6usize, &mut teams, false);
    assert_eq!(teams, vec![vec![0, 3], vec![1, 4], vec![2, 5]]);
}

#[test]
fn test_deal_skips_full_teams() {
    let mut teams = vec![vec![10, 11, 12, 13], vec![20]];
    deal(vec![1, 2, 3], &mut teams, true);
    assert_eq!(teams[0].len(), MAX_TEAM_SIZE);
    assert_eq!(teams[1], vec![20, 1, 2, 3]);
}

#[test]
fn test_tier_shuffle_stays_within_tiers() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut order: Vec<usize> = (0..12).collect();
    tier_shuffle(&mut order, 4, &mut rng);

    for (block, chunk) in order.chunks(4).enumerate() {
        let got: HashSet<usize> = chunk.iter().copied().collect();
        let want: HashSet<usize> = (block * 4..block * 4 + 4).collect();
        assert_eq!(got, want);
    }
}

#[test]
fn test_tier_sizes() {
    assert_eq!(Randomization::None.tier_size(12, Tiers::Roster), 3);
    assert_eq!(Randomization::Standard.tier_size(3, Tiers::Roster), 1);
    assert_eq!(Randomization::Aggressive.tier_size(12, Tiers::Roster), 4);
    assert_eq!(Randomization::Aggressive.tier_size(3, Tiers::Roster), 2);
    assert_eq!(Randomization::Standard.tier_size(6, Tiers::Anchors), 2);
    assert_eq!(Randomization::Aggressive.tier_size(6, Tiers::Anchors), 3);
}

#[test]
fn test_first_attempt_unshuffled_only_without_randomization() {
    assert!(!Randomization::None.shuffles(0));
    assert!(Randomization::None.shuffles(1));
    assert!(Randomization::Standard.shuffles(0));
    assert!(Randomization::Aggressive.shuffles(0));
}

#[test]
fn test_hill_climb_improves_and_respects_locks() {
    let skills = [40.0, 30.0, 20.0, 10.0, 35.0, 25.0, 15.0, 5.0];
    let mut teams = vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]];
    let before = TeamAverages::new(&skills, &teams).variance();

    let after = hill_climb(&mut teams, &skills, 1, 100);

    assert!(after < before);
    assert_eq!(teams[0][0], 0);
    assert_eq!(teams[1][0], 4);
}

#[test]
fn test_randomization_parse() {
    assert_eq!("none".parse::<Randomization>(), Ok(Randomization::None));
    assert_eq!("Aggressive".parse::<Randomization>(), Ok(Randomization::Aggressive));
    assert_eq!("on".parse::<Randomization>(), Ok(Randomization::Standard));
    assert!("wild".parse::<Randomization>().is_err());
    assert_eq!(Randomization::Standard.to_string(), "standard");
}
