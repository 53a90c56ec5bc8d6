//! Egg-drop dynamic programming
//!
//! Given `eggs` identical eggs and a building with `floors` floors, find the
//! minimum number of drops that identifies, in the worst case, the highest
//! floor an egg survives.
//!
//! ## Two formulations
//! 1. **Worst-case minimization** ([`solvers::worst_case`]): fill
//!    `T[eggs][floors]` egg by egg, choosing the first-drop floor by binary
//!    search over a valley-shaped cost.
//! 2. **Coverage maximization** ([`solvers::coverage`]): grow the drop count
//!    `d` until `d` drops with `eggs` eggs cover at least `floors` floors.
//!
//! Both are expressed as a [`LayeredRecurrence`] and driven by the same
//! [`SweepEngine`], which keeps the live frontier plus √T checkpoints.
//! They always agree.
//!
//! ## Quick start
//! ```
//! use egg_drop::{minimize_drops_for_coverage, minimize_worst_case_drops};
//!
//! assert_eq!(minimize_worst_case_drops(2, 100).unwrap(), 14);
//! assert_eq!(minimize_drops_for_coverage(2, 100).unwrap(), 14);
//! assert!(minimize_worst_case_drops(0, 100).is_err());
//! ```
//!
//! For strategy selection, batch solving and checkpoint tuning use
//! [`SolverBuilder`]; for the floors to actually drop from use [`DropPlan`].

pub mod builder;
pub mod checkpoint;
pub mod engine;
pub mod error;
pub mod plan;
pub mod problem;
pub mod solver;
pub mod solvers;
pub mod strategy;
pub(crate) mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::SolverBuilder;
pub use crate::engine::SweepEngine;
pub use crate::error::{EggDropError, Result};
pub use crate::plan::{DropPlan, Simulation, Trial};
pub use crate::problem::Problem;
pub use crate::solver::{Solution, Solver};
pub use crate::solvers::coverage::CoverageMaximizer;
pub use crate::solvers::worst_case::WorstCaseMinimizer;
pub use crate::strategy::Strategy;
pub use crate::traits::LayeredRecurrence;

/// Minimum worst-case drops via the worst-case table.
///
/// # Errors
/// [`EggDropError::InvalidEggCount`] if `eggs < 1`,
/// [`EggDropError::InvalidFloorCount`] if `floors < 0`,
/// [`EggDropError::TableTooLarge`] if a table row cannot be allocated.
pub fn minimize_worst_case_drops(eggs: i64, floors: i64) -> Result<u64> {
    let problem = Problem::new(eggs, floors)?;
    WorstCaseMinimizer::min_drops(&problem)
}

/// Minimum worst-case drops via floor coverage.
///
/// # Errors
/// [`EggDropError::InvalidEggCount`] if `eggs < 1`,
/// [`EggDropError::InvalidFloorCount`] if `floors < 0`.
pub fn minimize_drops_for_coverage(eggs: i64, floors: i64) -> Result<u64> {
    let problem = Problem::new(eggs, floors)?;
    Ok(CoverageMaximizer::min_drops(&problem))
}
