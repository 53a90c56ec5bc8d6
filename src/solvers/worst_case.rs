//! Worst-case minimization as a layered recurrence.
//!
//! `T[i][j]` is the minimum number of drops that always identifies the
//! critical floor with `i` eggs and `j` floors. Dropping first from floor `m`
//! leaves either `(i - 1, m - 1)` (the egg broke) or `(i, j - m)` (it
//! survived), so
//!
//! ```text
//! T[i][j] = 1 + min over m in 1..=j of max(T[i-1][m-1], T[i][j-m])
//! ```
//!
//! with `T[1][j] = j`, `T[i][1] = 1` and `T[i][0] = 0`.
//!
//! Layers are egg counts: layer `l` holds the row for `l + 1` eggs, so the
//! frontier at layer `l` is `T[l+1][0..=floors]`. Row `i` only reads row
//! `i - 1` and its own earlier cells, which is exactly the shape
//! [`LayeredRecurrence`] expects.
//!
//! The minimum over `m` is found by binary search: the break term
//! `T[i-1][m-1]` is non-decreasing in `m` and the survive term `T[i][j-m]` is
//! non-increasing, so their max is valley-shaped in `m`.

use crate::engine::SweepEngine;
use crate::error::{EggDropError, Result};
use crate::problem::Problem;
use crate::traits::LayeredRecurrence;

/// Worst-case DP instance for a fixed floor count.
#[derive(Clone, Debug)]
pub struct WorstCaseRecurrence {
    eggs: usize,
    floors: usize,
    one_egg: WorstCaseRow,
}

/// Frontier row: `drops[j] = T[i][j]` for the current egg count `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorstCaseRow {
    pub drops: Vec<u64>, // length = floors + 1
}

impl AsRef<[u64]> for WorstCaseRow {
    fn as_ref(&self) -> &[u64] {
        &self.drops
    }
}

impl WorstCaseRecurrence {
    /// Allocates the one-egg row up front, so an oversized floor count is
    /// reported here instead of aborting the sweep.
    ///
    /// # Errors
    /// [`EggDropError::TableTooLarge`] if a row of `floors + 1` cells exceeds
    /// the allocation limit or cannot be allocated.
    pub fn new(problem: &Problem) -> Result<Self> {
        let width = problem.table_width()?;
        let mut drops: Vec<u64> = Vec::new();
        drops
            .try_reserve_exact(width)
            .map_err(|_| EggDropError::TableTooLarge {
                floors: problem.floors(),
            })?;
        // One egg: linear search from the bottom.
        drops.extend(0..width as u64);
        Ok(Self {
            eggs: problem.effective_eggs(),
            floors: width - 1,
            one_egg: WorstCaseRow { drops },
        })
    }

    /// Egg count of the last row this recurrence computes.
    pub fn eggs(&self) -> usize {
        self.eggs
    }
}

impl LayeredRecurrence for WorstCaseRecurrence {
    type Frontier = WorstCaseRow;
    type Cost = u64;

    fn init_frontier(&self) -> WorstCaseRow {
        self.one_egg.clone()
    }

    fn forward_step(&self, _layer: usize, prev: &WorstCaseRow) -> WorstCaseRow {
        let mut drops = vec![0u64; self.floors + 1];
        if self.floors >= 1 {
            drops[1] = 1;
        }
        for j in 2..=self.floors {
            drops[j] = best_first_drop(&prev.drops, &drops, j);
        }
        WorstCaseRow { drops }
    }

    fn is_final(&self, layer: usize, _frontier: &WorstCaseRow) -> bool {
        layer + 1 >= self.eggs
    }

    fn extract_cost(&self, _layer: usize, frontier: &WorstCaseRow) -> u64 {
        frontier.drops[self.floors]
    }

    fn layer_hint(&self) -> Option<usize> {
        Some(self.eggs - 1)
    }
}

/// `1 + min over m of max(fewer[m-1], same[j-m])` by binary search on `m`.
///
/// `fewer` is the finished row for one egg less; `same` is the row being
/// built, valid on `0..j`. The minimum is tracked across every probe: the
/// search converges next to the crossing point of the two terms, but the
/// optimum can sit at any probe on the way there.
fn best_first_drop(fewer: &[u64], same: &[u64], j: usize) -> u64 {
    let mut low = 1usize;
    let mut high = j;
    let mut best = u64::MAX;

    while low <= high {
        let mid = low + (high - low) / 2;
        let breaks = fewer[mid - 1];
        let survives = same[j - mid];
        best = best.min(1 + breaks.max(survives));

        if breaks > survives {
            high = mid - 1;
        } else {
            low = mid + 1;
        }
    }

    best
}

/// Minimum worst-case drops by filling the `T[i][j]` table egg by egg.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorstCaseMinimizer;

impl WorstCaseMinimizer {
    /// # Errors
    /// [`EggDropError::TableTooLarge`] if a table row for the floor count
    /// cannot be allocated.
    pub fn min_drops(problem: &Problem) -> Result<u64> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "worst_case",
            eggs = problem.eggs(),
            floors = problem.floors()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let recurrence = WorstCaseRecurrence::new(problem)?;
        Ok(SweepEngine::new(recurrence).run().cost())
    }
}
