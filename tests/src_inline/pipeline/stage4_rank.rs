use super::*;

fn driver(id: &str, wins: i64, podiums: i64, points: f64) -> DriverSeasonStats {
    DriverSeasonStats::new(id).with_results(wins, podiums, points)
}

fn ids(ranked: &[RankedDriver]) -> Vec<&str> {
    ranked.iter().map(|d| d.driver_id.as_str()).collect()
}

#[test]
fn test_rank_descending_by_score() {
    let w = ScoreWeights::default_v1();
    let drivers = vec![
        driver("sargeant", 0, 0, 1.0),
        driver("verstappen", 19, 21, 575.0),
        driver("norris", 0, 7, 205.0),
        driver("perez", 2, 9, 285.0),
    ];
    let ranked = rank(&drivers, &w).unwrap();
    assert_eq!(ids(&ranked), vec!["verstappen", "perez", "norris", "sargeant"]);
    assert_eq!(
        ranked.iter().map(|d| d.rank).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    for pair in ranked.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
}

#[test]
fn test_all_zero_keeps_input_order() {
    let w = ScoreWeights::default_v1();
    let drivers = vec![
        DriverSeasonStats::new("c"),
        DriverSeasonStats::new("a"),
        DriverSeasonStats::new("b"),
    ];
    let ranked = rank(&drivers, &w).unwrap();
    assert_eq!(ids(&ranked), vec!["c", "a", "b"]);
}

#[test]
fn test_tie_broken_by_wins_then_points() {
    // Zero weights make every score equal so only the tie-break chain decides.
    let w = ScoreWeights {
        wins_weight: 0.0,
        podiums_weight: 0.0,
        points_weight: 0.0,
        csi_alpha: 0.2,
    };
    let drivers = vec![
        driver("few_wins", 1, 0, 300.0),
        driver("more_points", 3, 0, 150.0),
        driver("most_wins", 5, 0, 10.0),
        driver("less_points", 3, 0, 120.0),
        driver("twin", 3, 0, 150.0),
    ];
    let ranked = rank(&drivers, &w).unwrap();
    assert_eq!(
        ids(&ranked),
        vec!["most_wins", "more_points", "twin", "less_points", "few_wins"]
    );
}

#[test]
fn test_rank_is_deterministic() {
    let w = ScoreWeights::default_v1();
    let drivers = vec![
        driver("a", 1, 2, 40.0).with_csi(1.1),
        driver("b", 1, 2, 40.0).with_csi(1.1),
        driver("c", 0, 4, 66.0),
    ];
    assert_eq!(rank(&drivers, &w).unwrap(), rank(&drivers, &w).unwrap());
}

#[test]
fn test_rank_fails_on_invalid_record() {
    let w = ScoreWeights::default_v1();
    let drivers = vec![
        driver("ok", 1, 1, 10.0),
        driver("bad", 0, 0, 0.0).with_csi(0.0),
    ];
    match rank(&drivers, &w) {
        Err(ScoreError::InvalidInput { driver_id, .. }) => assert_eq!(driver_id, "bad"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_lenient_rank_excludes_invalid_records() {
    let w = ScoreWeights::default_v1();
    let drivers = vec![
        driver("bad_wins", -1, 0, 0.0),
        driver("leader", 6, 10, 250.0),
        driver("bad_csi", 1, 1, 10.0).with_csi(-0.3),
        driver("chaser", 2, 6, 180.0),
    ];
    let outcome = rank_lenient(&drivers, &w).unwrap();
    assert_eq!(ids(&outcome.ranked), vec!["leader", "chaser"]);
    assert_eq!(outcome.rejected.len(), 2);
    assert_eq!(outcome.rejected[0].driver_id, "bad_wins");
    assert_eq!(outcome.rejected[0].input_index, 0);
    assert!(outcome.rejected[0].reason.contains("wins"));
    assert_eq!(outcome.rejected[1].input_index, 2);
}

#[test]
fn test_lenient_rank_still_rejects_bad_weights() {
    let w = ScoreWeights {
        csi_alpha: f64::INFINITY,
        ..ScoreWeights::default_v1()
    };
    assert!(matches!(
        rank_lenient(&[driver("a", 1, 1, 1.0)], &w),
        Err(ScoreError::InvalidWeights(_))
    ));
}

#[test]
fn test_ranked_driver_carries_inputs() {
    let w = ScoreWeights::default_v1();
    let drivers = vec![
        driver("leclerc", 1, 6, 206.0)
            .with_poles(5)
            .with_constructor("ferrari"),
    ];
    let ranked = rank(&drivers, &w).unwrap();
    let d = &ranked[0];
    assert_eq!(d.constructor.as_deref(), Some("ferrari"));
    assert_eq!(d.poles, 5);
    assert_eq!(d.csi, 1.0);
    assert_eq!(d.wins, 1);
}

#[test]
fn test_featured_is_top_ranked() {
    let w = ScoreWeights::default_v1();
    assert!(featured(&[]).is_none());
    let drivers = vec![driver("b", 0, 1, 12.0), driver("a", 3, 5, 140.0)];
    let ranked = rank(&drivers, &w).unwrap();
    assert_eq!(featured(&ranked).map(|d| d.driver_id.as_str()), Some("a"));
}

#[test]
fn test_stronger_car_breaks_equal_raw_stats() {
    let w = ScoreWeights::default_v1();
    let drivers = vec![
        driver("weak_car", 2, 4, 90.0).with_csi(0.8),
        driver("strong_car", 2, 4, 90.0).with_csi(1.2),
    ];
    let ranked = rank(&drivers, &w).unwrap();
    assert_eq!(ids(&ranked), vec!["strong_car", "weak_car"]);
}

#[test]
fn test_overflowing_score_is_never_ranked() {
    let w = ScoreWeights {
        csi_alpha: 2.0,
        ..ScoreWeights::default_v1()
    };
    let drivers = vec![
        driver("steady", 1, 3, 45.0),
        DriverSeasonStats::new("rocket").with_csi(1e200),
    ];
    assert!(matches!(
        rank(&drivers, &w),
        Err(ScoreError::InvalidInput { .. })
    ));

    let outcome = rank_lenient(&drivers, &w).unwrap();
    assert_eq!(ids(&outcome.ranked), vec!["steady"]);
    assert_eq!(outcome.rejected[0].driver_id, "rocket");
    assert!(outcome.rejected[0].reason.contains("overflows"));
    assert!(outcome.ranked.iter().all(|d| d.score().is_finite()));
}
