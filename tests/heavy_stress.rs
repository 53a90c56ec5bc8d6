#![cfg(feature = "heavy")]
use egg_drop::{
    minimize_drops_for_coverage, minimize_worst_case_drops, DropPlan, Problem,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn heavy_random_equivalence() {
    let mut rng = StdRng::seed_from_u64(123);
    for _ in 0..40 {
        let eggs = rng.gen_range(1..12);
        let floors = rng.gen_range(0..50_000);
        assert_eq!(
            minimize_worst_case_drops(eggs, floors).unwrap(),
            minimize_drops_for_coverage(eggs, floors).unwrap(),
            "eggs={eggs} floors={floors}"
        );
    }
}

#[test]
fn heavy_plan_on_tall_building() {
    let mut rng = StdRng::seed_from_u64(7);
    let floors = 1_000_000_000i64;
    let plan = DropPlan::new(&Problem::new(4, floors).unwrap());
    for _ in 0..1_000 {
        let critical = rng.gen_range(0..=floors as u64);
        let sim = plan.simulate(critical).unwrap();
        assert_eq!(sim.critical_floor, critical);
        assert!(sim.trials.len() as u64 <= plan.min_drops());
    }
}
