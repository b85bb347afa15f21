use super::*;

#[test]
fn test_reference_counts() {
    assert_eq!(plan_team_count(6), 3);
    assert_eq!(plan_team_count(8), 2);
    assert_eq!(plan_team_count(12), 3);
    assert_eq!(plan_team_count(16), 4);
    assert_eq!(plan_team_count(20), 5);
}

#[test]
fn test_small_rosters() {
    assert_eq!(plan_team_count(0), 1);
    assert_eq!(plan_team_count(2), 1);
    assert_eq!(plan_team_count(3), 1);
    assert_eq!(plan_team_count(4), 2);
    // Three teams of five players would leave singletons
    assert_eq!(plan_team_count(5), 2);
    assert_eq!(plan_team_count(7), 2);
}

#[test]
fn test_never_exceeds_caps() {
    for total in 0..=40 {
        let teams = plan_team_count(total);
        assert!((1..=MAX_TEAMS).contains(&teams), "{total} players -> {teams}");
        if total <= MAX_PLAYERS {
            assert!(total <= teams * MAX_TEAM_SIZE, "{total} players overflow {teams} teams");
        }
        if total >= 4 {
            assert!(total / teams >= MIN_TEAM_SIZE, "{total} players -> {teams}");
        }
    }
}

#[test]
fn test_large_rosters_stay_at_five() {
    assert_eq!(plan_team_count(21), 5);
    assert_eq!(plan_team_count(100), 5);
    assert!(!plan(21).fits(21));
    assert!(plan(20).fits(20));
}

#[test]
fn test_region_without_members_is_infeasible() {
    assert_eq!(plan_team_count_with_region(10, 0), 0);
    assert_eq!(plan_with_region(10, 0).team_count, 0);
}

#[test]
fn test_region_caps_team_count() {
    assert_eq!(plan_team_count_with_region(16, 2), 2);
    assert_eq!(plan_team_count_with_region(16, 4), 4);
    assert_eq!(plan_team_count_with_region(20, 9), 5);
    assert_eq!(plan_team_count_with_region(6, 1), 1);
}

#[test]
fn test_region_count_never_exceeds_members() {
    for total in 2..=20 {
        for members in 1..=total {
            let teams = plan_team_count_with_region(total, members);
            assert!(teams >= 1);
            assert!(teams <= members.min(MAX_TEAMS), "{total}/{members} -> {teams}");
        }
    }
}

#[test]
fn test_plan_size_bounds() {
    let p = plan(10);
    assert_eq!(p.team_count, 3);
    assert_eq!(p.min_size, 3);
    assert_eq!(p.max_size, 4);

    let p = plan(8);
    assert_eq!((p.min_size, p.max_size), (4, 4));
}

#[test]
fn test_region_counts_start_from_two_teams() {
    assert_eq!(plan_team_count_with_region(6, 3), 2);
    assert_eq!(plan_team_count_with_region(6, 6), 2);
    assert_eq!(plan_team_count_with_region(5, 5), 2);
    assert_eq!(plan_team_count_with_region(8, 4), 2);
    assert_eq!(plan_team_count_with_region(4, 2), 2);
    assert_eq!(plan_team_count_with_region(3, 3), 1);
    assert_eq!(plan_team_count_with_region(12, 5), 3);
    assert_eq!(plan_team_count_with_region(20, 5), 5);

    let p = plan_with_region(6, 3);
    assert_eq!((p.team_count, p.min_size, p.max_size), (2, 3, 3));
}

#[test]
fn test_plan_capacity() {
    let p = TeamPlan::new(9, 2);
    assert_eq!(p.capacity(), 8);
    assert!(!p.fits(9));
    assert!(TeamPlan::new(8, 2).fits(8));
    assert!(!TeamPlan::new(3, 0).fits(3));
    assert!(plan_with_region(16, 2).capacity() < 16);
}
