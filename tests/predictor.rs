//! Integration tests for outcome prediction policies.

use bracket_sim::logic::{RankPoints, SeedOnly, StatsWithSeedBonus, RANK_STATS, RAW_STATS};
use bracket_sim::{predict, BracketError, Competitor, Policy, Predictor};

/// Competitor with every known stat: raw columns set to `raw`, rank columns to `rank`.
fn with_all_stats(team: &str, seed: u32, raw: f64, rank: f64) -> Competitor {
    let mut c = Competitor::new(team, "South", seed);
    for stat in RAW_STATS {
        c = c.with_stat(stat, raw);
    }
    for stat in RANK_STATS {
        c = c.with_stat(stat, rank);
    }
    c
}

#[test]
fn seed_policy_picks_lower_seed_in_either_order() {
    let one = Competitor::new("A", "South", 1);
    let sixteen = Competitor::new("B", "South", 16);
    assert_eq!(predict(&one, &sixteen, 1).unwrap().team, "A");
    assert_eq!(predict(&sixteen, &one, 1).unwrap().team, "A");
}

#[test]
fn seed_policy_equal_seeds_go_to_team_a() {
    let south = Competitor::new("A", "South", 1);
    let west = Competitor::new("C", "West", 1);
    assert_eq!(SeedOnly.pick(&south, &west).unwrap().team, "A");
    assert_eq!(SeedOnly.pick(&west, &south).unwrap().team, "C");
}

#[test]
fn winner_is_one_of_the_arguments() {
    let a = with_all_stats("A", 3, 10.0, 5.0);
    let b = with_all_stats("B", 6, 12.0, 2.0);
    for policy in Policy::ALL {
        let w = policy.predictor().pick(&a, &b).unwrap();
        assert!(std::ptr::eq(w, &a) || std::ptr::eq(w, &b), "{policy}");
    }
}

#[test]
fn rank_points_lower_rank_wins_over_better_seed() {
    let favourite = with_all_stats("Fav", 2, 0.0, 40.0);
    let underdog = with_all_stats("Dog", 15, 0.0, 10.0);
    assert_eq!(predict(&favourite, &underdog, 2).unwrap().team, "Dog");
}

#[test]
fn rank_points_tie_falls_back_to_seed() {
    // One rank each way, everything else equal.
    let a = with_all_stats("A", 9, 0.0, 20.0).with_stat("AdjORank", 1.0);
    let b = with_all_stats("B", 8, 0.0, 20.0).with_stat("AdjDRank", 1.0);
    assert_eq!(RankPoints.pick(&a, &b).unwrap().team, "B");
    assert_eq!(RankPoints.pick(&b, &a).unwrap().team, "B");
    assert_eq!(
        RankPoints.pick(&a, &b).unwrap(),
        SeedOnly.pick(&a, &b).unwrap()
    );
}

#[test]
fn rank_points_missing_stat_is_an_error() {
    let mut a = with_all_stats("A", 1, 0.0, 1.0);
    a.stats.remove("AdjORank");
    let b = with_all_stats("B", 2, 0.0, 2.0);
    assert_eq!(
        predict(&a, &b, 2),
        Err(BracketError::MissingStat {
            team: "A".to_string(),
            stat: "AdjORank".to_string()
        })
    );
}

#[test]
fn textual_stat_counts_as_missing() {
    let mut a = with_all_stats("A", 1, 0.0, 1.0);
    a.stats.insert(
        "AdjEM".to_string(),
        bracket_sim::StatValue::Text("n/a".to_string()),
    );
    let b = with_all_stats("B", 2, 0.0, 2.0);
    assert!(matches!(
        predict(&a, &b, 4),
        Err(BracketError::MissingStat { ref stat, .. }) if stat == "AdjEM"
    ));
}

#[test]
fn full_stats_respects_stat_direction() {
    // Lower AdjD (points allowed) is better; higher AdjO is better.
    let a = with_all_stats("A", 7, 50.0, 30.0)
        .with_stat("AdjD", 90.0)
        .with_stat("AdjO", 120.0);
    let b = with_all_stats("B", 10, 50.0, 30.0)
        .with_stat("AdjD", 95.0)
        .with_stat("AdjO", 110.0);
    let c = with_all_stats("C", 10, 50.0, 30.0)
        .with_stat("AdjD", 85.0)
        .with_stat("AdjO", 125.0);
    assert_eq!(predict(&b, &a, 3).unwrap().team, "A");
    assert_eq!(predict(&a, &c, 3).unwrap().team, "C");
}

#[test]
fn seed_bonus_breaks_an_even_stat_line() {
    // A wins one stat, the 2 seed gets the bonus point: 1-1, seed decides.
    let a = with_all_stats("A", 7, 50.0, 30.0).with_stat("AdjEM", 60.0);
    let b = with_all_stats("B", 2, 50.0, 30.0);
    assert_eq!(predict(&a, &b, 3).unwrap().team, "B");

    // Without the bonus (seed 3) A's single stat carries it.
    let b3 = with_all_stats("B", 3, 50.0, 30.0);
    assert_eq!(predict(&a, &b3, 3).unwrap().team, "A");
}

#[test]
fn seed_bonus_goes_to_team_a_when_both_are_top_two() {
    // B is better on one stat; A (seed 2) takes the bonus, B (seed 1) does not.
    let a = with_all_stats("A", 2, 50.0, 30.0);
    let b = with_all_stats("B", 1, 50.0, 30.0).with_stat("AdjEM", 60.0);
    // 1-1 tie, seed fallback: B is seed 1.
    assert_eq!(predict(&a, &b, 3).unwrap().team, "B");
    // Swapped: B is team A now and gets both the stat and the bonus.
    assert_eq!(predict(&b, &a, 3).unwrap().team, "B");

    let a_stronger = a.clone().with_stat("AdjO", 200.0);
    // A: AdjO + bonus = 2, B: AdjEM = 1.
    assert_eq!(predict(&a_stronger, &b, 3).unwrap().team, "A");
}

#[test]
fn raw_stats_ignore_rank_columns() {
    let a = with_all_stats("A", 6, 50.0, 30.0).with_stat("AdjORank", 1.0);
    let b = with_all_stats("B", 7, 50.0, 30.0).with_stat("AdjEM", 60.0);
    assert_eq!(predict(&a, &b, 4).unwrap().team, "B");
    // Counting ranks too makes it 1-1, which the 6 seed wins.
    assert_eq!(predict(&a, &b, 3).unwrap().team, "A");
}

#[test]
fn raw_stats_do_not_require_rank_columns() {
    let mut a = with_all_stats("A", 4, 50.0, 30.0);
    let mut b = with_all_stats("B", 5, 50.0, 30.0);
    for stat in RANK_STATS {
        a.stats.remove(stat);
        b.stats.remove(stat);
    }
    assert_eq!(predict(&a, &b, 4).unwrap().team, "A");
    assert!(matches!(predict(&a, &b, 3), Err(BracketError::MissingStat { .. })));
}

#[test]
fn required_stats_match_the_policy() {
    assert!(SeedOnly.required_stats().is_empty());
    assert_eq!(RankPoints.required_stats(), RANK_STATS.to_vec());
    assert_eq!(StatsWithSeedBonus::raw().required_stats(), RAW_STATS.to_vec());
    let full = StatsWithSeedBonus::full().required_stats();
    assert_eq!(full.len(), RAW_STATS.len() + RANK_STATS.len());
    assert!(full.iter().all(|s| RAW_STATS.contains(s) || RANK_STATS.contains(s)));
}

#[test]
fn unknown_policy_id_fails() {
    let a = Competitor::new("A", "South", 1);
    let b = Competitor::new("B", "South", 2);
    assert_eq!(
        predict(&a, &b, 99),
        Err(BracketError::InvalidPolicy("99".to_string()))
    );
    assert!(Policy::from_id(0).is_err());
}

#[test]
fn policy_parses_from_id_or_name() {
    for policy in Policy::ALL {
        assert_eq!(policy.id().to_string().parse::<Policy>(), Ok(policy));
        assert_eq!(policy.name().parse::<Policy>(), Ok(policy));
        assert_eq!(policy.predictor().name(), policy.name());
    }
    assert_eq!(
        "coin-flip".parse::<Policy>(),
        Err(BracketError::InvalidPolicy("coin-flip".to_string()))
    );
}
