use super::*;
use crate::planner::MAX_TEAM_SIZE;
use crate::skill::Rating;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn players(region: &str, ids: std::ops::Range<u64>) -> Vec<Player> {
    ids.map(|i| Player::new(i, format!("p{i}"), region, Rating::default()))
        .collect()
}

#[test]
fn test_random_partition_respects_cap_and_fills_teams() {
    let mut rng = StdRng::seed_from_u64(8);
    for n in 2..=20u64 {
        let roster = players("NA", 0..n);
        for k in 1..=5usize {
            let partition = random_partition(&roster, k, &mut rng);
            if n as usize > k * MAX_TEAM_SIZE {
                assert!(partition.is_empty());
                continue;
            }
            assert_eq!(partition.player_count(), n as usize);
            assert_eq!(partition.len(), k.min(n as usize));
            assert!(partition.iter().all(|t| !t.is_empty() && t.len() <= MAX_TEAM_SIZE));
        }
    }
}

#[test]
fn test_random_partition_infeasible() {
    let mut rng = StdRng::seed_from_u64(8);
    assert!(random_partition(&[], 2, &mut rng).is_empty());
    assert!(random_partition(&players("NA", 0..1), 1, &mut rng).is_empty());
    assert!(random_partition(&players("NA", 0..4), 0, &mut rng).is_empty());
}

#[test]
fn test_random_partition_is_not_fixed() {
    let roster = players("NA", 0..12);
    let mut rng = StdRng::seed_from_u64(2);
    let first = random_partition(&roster, 3, &mut rng);
    let differs = (0..20).any(|_| random_partition(&roster, 3, &mut rng) != first);
    assert!(differs);
}

#[test]
fn test_region_random_anchors_every_team() {
    let eu = players("EU", 0..3);
    let na = players("NA", 3..11);
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..25 {
        let partition = random_partition_with_region(&eu, &na, 3, &mut rng);
        assert_eq!(partition.len(), 3);
        assert_eq!(partition.player_count(), 11);
        assert!(partition.covers_region("eu"));
        assert!(partition.iter().all(|t| t.players[0].in_region("EU")));
    }
}

#[test]
fn test_region_random_without_region_players() {
    let mut rng = StdRng::seed_from_u64(13);
    let partition = random_partition_with_region(&[], &players("NA", 0..6), 2, &mut rng);
    assert!(partition.is_empty());
}
