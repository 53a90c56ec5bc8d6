//! Optimal drop plan derived from the coverage table.
//!
//! With `d` drops and `e` eggs left and the critical floor known to lie in
//! `low..=high`, dropping from `low + C[d-1][e-1] + 1` is optimal: if the egg
//! breaks, the `C[d-1][e-1]` floors below are exactly what `d - 1` drops and
//! `e - 1` eggs can resolve; if it survives, at most `C[d-1][e]` candidates
//! remain above. Either way `high - low <= C[d][e]` is preserved, so the plan
//! never needs more than the minimum drop count.
//!
//! Floors are numbered `1..=floors`. The critical floor is the highest floor
//! an egg survives, in `0..=floors`: 0 means every floor breaks it, `floors`
//! means none does.

use crate::engine::SweepEngine;
use crate::error::{EggDropError, Result};
use crate::problem::Problem;
use crate::solvers::coverage::{single_egg_drops, CoverageRecurrence};
use crate::table::SubproblemTable;

/// One drop of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    pub floor: u64,
    pub broke: bool,
}

/// Outcome of replaying the plan against a known critical floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub trials: Vec<Trial>,
    /// Critical floor deduced from the trial outcomes.
    pub critical_floor: u64,
}

/// Decision procedure achieving the minimum worst-case drop count.
///
/// Building a plan tabulates `C[0..=drops][0..=eggs]`, so it costs
/// `O(eggs · drops)` memory. With one usable egg no table is kept: the plan
/// is a linear scan from the bottom.
#[derive(Debug, Clone)]
pub struct DropPlan {
    problem: Problem,
    eggs: usize,
    drops: u64,
    table: SubproblemTable,
}

impl DropPlan {
    pub fn new(problem: &Problem) -> Self {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "drop_plan",
            eggs = problem.eggs(),
            floors = problem.floors()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (drops, table) = match single_egg_drops(problem) {
            Some(drops) => (drops, SubproblemTable::with_width(2)),
            None => SweepEngine::new(CoverageRecurrence::new(problem)).tabulate(),
        };
        Self {
            problem: *problem,
            eggs: problem.effective_eggs(),
            drops,
            table,
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    /// Minimum worst-case drop count; the plan never exceeds it.
    pub fn min_drops(&self) -> u64 {
        self.drops
    }

    /// Floor of the opening drop, or `None` for a building with no floors.
    pub fn first_drop(&self) -> Option<u64> {
        let floors = self.problem.floors();
        if floors == 0 {
            return None;
        }
        Some(self.next_floor(0, floors, self.eggs, self.drops))
    }

    /// Replay the plan against `critical`.
    ///
    /// # Errors
    /// [`EggDropError::CriticalFloorOutOfRange`] if `critical > floors`.
    pub fn simulate(&self, critical: u64) -> Result<Simulation> {
        let floors = self.problem.floors();
        if critical > floors {
            return Err(EggDropError::CriticalFloorOutOfRange { critical, floors });
        }

        let mut low = 0u64;
        let mut high = floors;
        let mut eggs = self.eggs;
        let mut drops = self.drops;
        let mut trials = Vec::new();

        while low < high {
            // high - low <= C[drops][eggs] forces both to be positive here.
            debug_assert!(eggs >= 1 && drops >= 1);
            let floor = self.next_floor(low, high, eggs, drops);
            let broke = floor > critical;
            trials.push(Trial { floor, broke });
            if broke {
                high = floor - 1;
                eggs -= 1;
            } else {
                low = floor;
            }
            drops -= 1;
        }

        Ok(Simulation {
            trials,
            critical_floor: low,
        })
    }

    /// Most trials the plan uses over every possible critical floor.
    ///
    /// Walks all `floors + 1` outcomes; meant for verification on small
    /// buildings.
    pub fn worst_case_trials(&self) -> usize {
        (0..=self.problem.floors())
            .filter_map(|c| self.simulate(c).ok())
            .map(|s| s.trials.len())
            .max()
            .unwrap_or(0)
    }

    fn next_floor(&self, low: u64, high: u64, eggs: usize, drops: u64) -> u64 {
        // C[d][0] = 0: the last egg climbs one floor at a time.
        let below = if eggs == 1 {
            0
        } else {
            self.table.get(drops as usize - 1, eggs - 1)
        };
        low.saturating_add(below).saturating_add(1).min(high)
    }
}
