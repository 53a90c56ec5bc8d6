//! Example: walk through the optimal drops for a given critical floor.
//!
//! Run with:
//! `cargo run --example drop_plan -- [eggs] [floors] [critical]`

use std::env;
use std::process;

use egg_drop::{DropPlan, Problem};

fn main() {
    let args: Vec<i64> = match env::args().skip(1).map(|a| a.parse::<i64>()).collect() {
        Ok(v) => v,
        Err(err) => {
            eprintln!("drop_plan: {err}");
            process::exit(2);
        }
    };
    let eggs = args.first().copied().unwrap_or(2);
    let floors = args.get(1).copied().unwrap_or(100);
    let critical = args.get(2).copied().unwrap_or(floors / 2);

    let problem = match Problem::new(eggs, floors) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("drop_plan: {err}");
            process::exit(2);
        }
    };
    let plan = DropPlan::new(&problem);

    println!(
        "{eggs} eggs, {floors} floors: at most {} drops",
        plan.min_drops()
    );
    match plan.simulate(critical.max(0) as u64) {
        Ok(sim) => {
            for (i, t) in sim.trials.iter().enumerate() {
                let outcome = if t.broke { "breaks" } else { "survives" };
                println!("  drop {:>2}: floor {:>6} -> {outcome}", i + 1, t.floor);
            }
            println!("critical floor: {}", sim.critical_floor);
        }
        Err(err) => {
            eprintln!("drop_plan: {err}");
            process::exit(2);
        }
    }
}
