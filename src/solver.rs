//! Strategy-dispatching solver facade.

use crate::engine::SweepEngine;
use crate::error::Result;
use crate::problem::Problem;
use crate::solvers::coverage::{single_egg_drops, CoverageRecurrence};
use crate::solvers::worst_case::WorstCaseRecurrence;
use crate::strategy::Strategy;
use crate::traits::LayeredRecurrence;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Answer to one query, with the formulation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// Minimum number of drops that always identifies the critical floor.
    pub drops: u64,
    /// Concrete strategy that ran (never [`Strategy::Auto`]).
    pub strategy: Strategy,
    /// Forward steps the sweep took.
    pub layers: usize,
}

/// Configured solver. Build one with [`SolverBuilder`](crate::SolverBuilder)
/// or take the default (auto strategy, √T checkpoints).
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    pub(crate) strategy: Strategy,
    pub(crate) checkpoint_interval: Option<usize>,
}

impl Solver {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn checkpoint_interval(&self) -> Option<usize> {
        self.checkpoint_interval
    }

    /// Solve one validated problem.
    ///
    /// # Errors
    /// [`EggDropError::TableTooLarge`](crate::EggDropError::TableTooLarge) if
    /// the worst-case strategy is selected for a floor count whose table row
    /// cannot be allocated.
    pub fn solve(&self, problem: &Problem) -> Result<Solution> {
        let strategy = self.strategy.resolve(problem);

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "solve",
            eggs = problem.eggs(),
            floors = problem.floors(),
            strategy = strategy.label()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (drops, layers) = match strategy {
            Strategy::CoverageMaximization => match single_egg_drops(problem) {
                Some(drops) => (drops, 0),
                None => {
                    let sweep = self.engine(CoverageRecurrence::new(problem)).run();
                    (sweep.cost(), sweep.layers())
                }
            },
            _ => {
                let sweep = self.engine(WorstCaseRecurrence::new(problem)?).run();
                (sweep.cost(), sweep.layers())
            }
        };

        Ok(Solution {
            drops,
            strategy,
            layers,
        })
    }

    /// Solve many independent problems, preserving input order.
    ///
    /// Runs on the rayon pool when the `parallel` feature is enabled.
    ///
    /// # Errors
    /// The first error any query produces.
    pub fn solve_batch(&self, problems: &[Problem]) -> Result<Vec<Solution>> {
        #[cfg(feature = "parallel")]
        let solutions: Result<Vec<Solution>> =
            problems.par_iter().map(|p| self.solve(p)).collect();
        #[cfg(not(feature = "parallel"))]
        let solutions: Result<Vec<Solution>> = problems.iter().map(|p| self.solve(p)).collect();
        solutions
    }

    fn engine<P: LayeredRecurrence>(&self, recurrence: P) -> SweepEngine<P> {
        match self.checkpoint_interval {
            Some(n) => SweepEngine::with_checkpoint_interval(recurrence, n),
            None => SweepEngine::new(recurrence),
        }
    }
}
