//! Choice between the two formulations.

use crate::problem::Problem;

/// Table size below which [`Strategy::Auto`] fills the worst-case table.
///
/// Measured in cells (`effective_eggs · floors`); both formulations are
/// instantaneous at this size and the worst-case table is the more direct one.
pub const AUTO_TABLE_CELLS: u64 = 4096;

/// Which formulation a [`Solver`](crate::Solver) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Fill `T[eggs][floors]` with binary search over the first-drop floor.
    WorstCaseMinimization,
    /// Grow the drop count until `C[drops][eggs] >= floors`.
    CoverageMaximization,
    /// Pick per problem from the floors-to-eggs shape.
    #[default]
    Auto,
}

impl Strategy {
    /// Resolve [`Strategy::Auto`] for a concrete problem; other variants are
    /// returned unchanged.
    pub fn resolve(self, problem: &Problem) -> Strategy {
        match self {
            Strategy::Auto => {
                let cells = (problem.effective_eggs() as u64).saturating_mul(problem.floors());
                if cells <= AUTO_TABLE_CELLS {
                    Strategy::WorstCaseMinimization
                } else {
                    Strategy::CoverageMaximization
                }
            }
            concrete => concrete,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::WorstCaseMinimization => "worst_case",
            Strategy::CoverageMaximization => "coverage",
            Strategy::Auto => "auto",
        }
    }

    /// Parse a [`label`](Self::label) back into a strategy.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "worst_case" => Some(Strategy::WorstCaseMinimization),
            "coverage" => Some(Strategy::CoverageMaximization),
            "auto" => Some(Strategy::Auto),
            _ => None,
        }
    }
}
