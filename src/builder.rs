use crate::solver::Solver;
use crate::strategy::Strategy;

/// Builder for a [`Solver`].
///
/// ```
/// use egg_drop::{Problem, SolverBuilder, Strategy};
///
/// let solver = SolverBuilder::new()
///     .strategy(Strategy::CoverageMaximization)
///     .build();
/// let solution = solver.solve(&Problem::new(2, 100).unwrap()).unwrap();
/// assert_eq!(solution.drops, 14);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverBuilder {
    strategy: Strategy,
    checkpoint_interval: Option<usize>,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Keep a frontier checkpoint every `interval` layers instead of ≈ √T.
    ///
    /// # Panics
    /// Panics if `interval == 0`.
    pub fn checkpoint_interval(mut self, interval: usize) -> Self {
        assert!(interval > 0, "checkpoint_interval must be positive");
        self.checkpoint_interval = Some(interval);
        self
    }

    pub fn build(self) -> Solver {
        Solver {
            strategy: self.strategy,
            checkpoint_interval: self.checkpoint_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_auto_with_heuristic_interval() {
        let solver = SolverBuilder::new().build();
        assert_eq!(solver.strategy(), Strategy::Auto);
        assert_eq!(solver.checkpoint_interval(), None);
    }

    #[test]
    fn settings_are_carried_into_solver() {
        let solver = SolverBuilder::new()
            .strategy(Strategy::WorstCaseMinimization)
            .checkpoint_interval(5)
            .build();
        assert_eq!(solver.strategy(), Strategy::WorstCaseMinimization);
        assert_eq!(solver.checkpoint_interval(), Some(5));
    }

    #[test]
    #[should_panic(expected = "checkpoint_interval must be positive")]
    fn zero_interval_is_rejected() {
        let _ = SolverBuilder::new().checkpoint_interval(0);
    }
}
