use egg_drop::{minimize_drops_for_coverage, minimize_worst_case_drops, EggDropError};

const SCENARIOS: &[(i64, i64, u64)] = &[
    (2, 100, 14),
    (1, 10, 10),
    (5, 0, 0),
    (2, 36, 8),
    (3, 14, 4),
    (2, 1_000, 45),
    (3, 100, 9),
    (6, 1_000, 11),
    (10, 1_000, 10),
];

#[test]
fn worst_case_matches_known_answers() {
    for &(eggs, floors, expected) in SCENARIOS {
        assert_eq!(
            minimize_worst_case_drops(eggs, floors).unwrap(),
            expected,
            "eggs={eggs} floors={floors}"
        );
    }
}

#[test]
fn coverage_matches_known_answers() {
    for &(eggs, floors, expected) in SCENARIOS {
        assert_eq!(
            minimize_drops_for_coverage(eggs, floors).unwrap(),
            expected,
            "eggs={eggs} floors={floors}"
        );
    }
}

#[test]
fn one_egg_is_a_linear_scan() {
    for floors in 0..=300 {
        assert_eq!(minimize_worst_case_drops(1, floors).unwrap(), floors as u64);
        assert_eq!(minimize_drops_for_coverage(1, floors).unwrap(), floors as u64);
    }
}

#[test]
fn zero_and_one_floor() {
    for eggs in 1..=20 {
        assert_eq!(minimize_worst_case_drops(eggs, 0).unwrap(), 0);
        assert_eq!(minimize_worst_case_drops(eggs, 1).unwrap(), 1);
        assert_eq!(minimize_drops_for_coverage(eggs, 0).unwrap(), 0);
        assert_eq!(minimize_drops_for_coverage(eggs, 1).unwrap(), 1);
    }
}

#[test]
fn invalid_inputs_are_rejected_by_both_solvers() {
    assert_eq!(
        minimize_worst_case_drops(0, 10),
        Err(EggDropError::InvalidEggCount(0))
    );
    assert_eq!(
        minimize_drops_for_coverage(-2, 10),
        Err(EggDropError::InvalidEggCount(-2))
    );
    assert_eq!(
        minimize_worst_case_drops(2, -1),
        Err(EggDropError::InvalidFloorCount(-1))
    );
    assert_eq!(
        minimize_drops_for_coverage(2, i64::MIN),
        Err(EggDropError::InvalidFloorCount(i64::MIN))
    );
}

#[test]
fn unallocatable_table_is_reported_not_panicked() {
    assert_eq!(
        minimize_worst_case_drops(2, i64::MAX),
        Err(EggDropError::TableTooLarge {
            floors: i64::MAX as u64
        })
    );
    // The coverage formulation never builds a floor-wide row.
    assert_eq!(minimize_drops_for_coverage(64, i64::MAX).unwrap(), 63);
}
