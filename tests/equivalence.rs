use egg_drop::{
    minimize_drops_for_coverage, minimize_worst_case_drops, Problem, SolverBuilder, Strategy,
};
use proptest::prelude::*;

#[test]
fn solvers_agree_on_small_grid() {
    for eggs in 1..=5 {
        for floors in 0..=200 {
            assert_eq!(
                minimize_worst_case_drops(eggs, floors).unwrap(),
                minimize_drops_for_coverage(eggs, floors).unwrap(),
                "eggs={eggs} floors={floors}"
            );
        }
    }
}

#[test]
fn strategies_agree_through_solver() {
    let table = SolverBuilder::new()
        .strategy(Strategy::WorstCaseMinimization)
        .build();
    let coverage = SolverBuilder::new()
        .strategy(Strategy::CoverageMaximization)
        .build();
    for eggs in [1, 2, 3, 8, 40] {
        for floors in [0, 1, 2, 3, 63, 64, 65, 500, 1_023, 1_024] {
            let p = Problem::new(eggs, floors).unwrap();
            assert_eq!(
                table.solve(&p).unwrap().drops,
                coverage.solve(&p).unwrap().drops,
                "eggs={eggs} floors={floors}"
            );
        }
    }
}

proptest! {
    #[test]
    fn solvers_agree_on_random_instances(eggs in 1i64..12, floors in 0i64..2_000) {
        prop_assert_eq!(
            minimize_worst_case_drops(eggs, floors).unwrap(),
            minimize_drops_for_coverage(eggs, floors).unwrap()
        );
    }

    #[test]
    fn checkpoint_interval_is_invisible(eggs in 1i64..6, floors in 0i64..400, interval in 1usize..20) {
        let p = Problem::new(eggs, floors).unwrap();
        let reference = minimize_worst_case_drops(eggs, floors).unwrap();
        for strategy in [Strategy::WorstCaseMinimization, Strategy::CoverageMaximization] {
            let solver = SolverBuilder::new()
                .strategy(strategy)
                .checkpoint_interval(interval)
                .build();
            prop_assert_eq!(solver.solve(&p).unwrap().drops, reference);
        }
    }
}
