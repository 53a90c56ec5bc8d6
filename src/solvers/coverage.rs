//! Coverage maximization: the egg-drop problem turned inside out.
//!
//! Instead of asking how many drops `n` floors need, ask how many floors `d`
//! drops can tell apart. With `C[d][i]` the most floors distinguishable using
//! `d` drops and `i` eggs:
//!
//! ```text
//! C[0][i] = 0,  C[d][0] = 0
//! C[d][i] = C[d-1][i-1] + C[d-1][i] + 1
//! ```
//!
//! The first drop tests one floor; if the egg breaks the floors below it are
//! searched with one egg and one drop less, otherwise the floors above it are
//! searched with the same eggs and one drop less. The answer is the smallest
//! `d` with `C[d][eggs] >= floors`.
//!
//! Layers are drop counts, the frontier at layer `d` is `C[d][0..=eggs]`, and
//! the sweep length is the answer itself, typically far below `eggs · floors`.

use crate::engine::SweepEngine;
use crate::problem::Problem;
use crate::traits::LayeredRecurrence;

/// Coverage DP instance for a fixed egg count.
#[derive(Clone, Debug)]
pub struct CoverageRecurrence {
    eggs: usize,
    floors: u64,
}

/// Frontier row: `floors[i] = C[d][i]` for the current drop count `d`.
///
/// Values saturate at `u64::MAX`, which already covers every floor count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageRow {
    pub floors: Vec<u64>, // length = eggs + 1
}

impl AsRef<[u64]> for CoverageRow {
    fn as_ref(&self) -> &[u64] {
        &self.floors
    }
}

impl CoverageRecurrence {
    pub fn new(problem: &Problem) -> Self {
        Self {
            eggs: problem.effective_eggs(),
            floors: problem.floors(),
        }
    }

    /// Egg count of the column the sweep is checked against.
    pub fn eggs(&self) -> usize {
        self.eggs
    }
}

impl LayeredRecurrence for CoverageRecurrence {
    type Frontier = CoverageRow;
    type Cost = u64;

    fn init_frontier(&self) -> CoverageRow {
        CoverageRow {
            floors: vec![0; self.eggs + 1],
        }
    }

    fn forward_step(&self, _layer: usize, prev: &CoverageRow) -> CoverageRow {
        let mut floors = vec![0u64; self.eggs + 1];
        for i in 1..=self.eggs {
            floors[i] = prev.floors[i - 1]
                .saturating_add(prev.floors[i])
                .saturating_add(1);
        }
        CoverageRow { floors }
    }

    fn is_final(&self, _layer: usize, frontier: &CoverageRow) -> bool {
        frontier.floors[self.eggs] >= self.floors
    }

    fn extract_cost(&self, layer: usize, _frontier: &CoverageRow) -> u64 {
        layer as u64
    }

    fn layer_hint(&self) -> Option<usize> {
        // One egg covers d floors in d drops; two eggs cover d(d+1)/2, an
        // upper bound on the sweep length for every larger egg count.
        let bound = if self.eggs == 1 {
            self.floors
        } else {
            ((2.0 * self.floors as f64).sqrt().ceil() as u64).saturating_add(1)
        };
        Some(usize::try_from(bound).unwrap_or(usize::MAX))
    }
}

/// Minimum worst-case drops by growing the drop count until the coverage
/// reaches the floor count.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoverageMaximizer;

impl CoverageMaximizer {
    pub fn min_drops(problem: &Problem) -> u64 {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "coverage",
            eggs = problem.eggs(),
            floors = problem.floors()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        single_egg_drops(problem).unwrap_or_else(|| {
            SweepEngine::new(CoverageRecurrence::new(problem))
                .run()
                .cost()
        })
    }
}

/// Closed-form answer when only one egg is usable.
///
/// `C[d][1] = d`, so the sweep would take exactly `floors` layers.
pub(crate) fn single_egg_drops(problem: &Problem) -> Option<u64> {
    (problem.effective_eggs() == 1).then(|| problem.floors())
}
