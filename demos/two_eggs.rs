//! Example: the classic two eggs, hundred floors puzzle.
//!
//! Run with:
//! `cargo run --example two_eggs`

use egg_drop::{minimize_drops_for_coverage, minimize_worst_case_drops};

fn main() -> egg_drop::Result<()> {
    let (eggs, floors) = (2, 100);

    let by_table = minimize_worst_case_drops(eggs, floors)?;
    let by_coverage = minimize_drops_for_coverage(eggs, floors)?;

    println!("{eggs} eggs, {floors} floors");
    println!("  worst-case table : {by_table} drops");
    println!("  floor coverage   : {by_coverage} drops");
    Ok(())
}
