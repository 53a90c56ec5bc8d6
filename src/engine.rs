//! Generic forward sweep over a layered recurrence.
//!
//! The engine walks layers 0, 1, 2, ... until the recurrence reports a final
//! layer, keeping only the live frontier plus a checkpoint every
//! `checkpoint_interval` layers. Any intermediate frontier can later be
//! recovered by replaying at most `checkpoint_interval - 1` steps from the
//! nearest checkpoint, so a sweep of T layers with the default interval keeps
//! O(√T) frontiers alive.
//!
//! The engine is completely generic over implementations of
//! [`LayeredRecurrence`].

use crate::checkpoint::{nearest_at_or_below, Checkpoint};
use crate::table::SubproblemTable;
use crate::traits::LayeredRecurrence;
use crate::utils::default_checkpoint_interval;

/// Forward-sweep engine for a given recurrence `P`.
///
/// Typical usage:
/// ```
/// use egg_drop::{engine::SweepEngine, solvers::coverage::CoverageRecurrence, Problem};
///
/// let problem = Problem::new(2, 100).unwrap();
/// let sweep = SweepEngine::new(CoverageRecurrence::new(&problem)).run();
/// assert_eq!(sweep.cost(), 14);
/// ```
pub struct SweepEngine<P: LayeredRecurrence> {
    problem: P,
    checkpoint_interval: usize,
}

/// Outcome of [`SweepEngine::run`].
pub struct Sweep<P: LayeredRecurrence> {
    cost: P::Cost,
    layers: usize,
    last: P::Frontier,
    checkpoints: Vec<Checkpoint<P::Frontier>>,
}

impl<P: LayeredRecurrence> SweepEngine<P> {
    /// Create a new engine with a heuristic checkpoint interval (≈ √T, where
    /// T is the recurrence's layer hint; 1 when no hint is given).
    pub fn new(problem: P) -> Self {
        let t = problem.layer_hint().unwrap_or(0);
        let interval = default_checkpoint_interval(t).max(1);
        Self::with_checkpoint_interval(problem, interval)
    }

    /// Create a new engine with an explicit checkpoint interval.
    ///
    /// # Panics
    /// Panics if `checkpoint_interval == 0`.
    pub fn with_checkpoint_interval(problem: P, checkpoint_interval: usize) -> Self {
        assert!(
            checkpoint_interval > 0,
            "checkpoint_interval must be positive"
        );
        Self {
            problem,
            checkpoint_interval,
        }
    }

    /// Expose immutable reference to the underlying recurrence.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Return the configured checkpoint interval.
    pub fn checkpoint_interval(&self) -> usize {
        self.checkpoint_interval
    }

    /// Sweep until the final layer, retaining periodic checkpoints.
    ///
    /// Layer 0 is always checkpointed.
    pub fn run(&self) -> Sweep<P> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("sweep_run", interval = self.checkpoint_interval);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier = self.problem.init_frontier();
        let mut checkpoints = vec![Checkpoint {
            layer: 0,
            frontier: frontier.clone(),
        }];
        let mut layer = 0usize;

        while !self.problem.is_final(layer, &frontier) {
            frontier = self.problem.forward_step(layer, &frontier);
            layer += 1;
            if layer % self.checkpoint_interval == 0 {
                checkpoints.push(Checkpoint {
                    layer,
                    frontier: frontier.clone(),
                });
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(layers = layer, checkpoints = checkpoints.len(), "sweep finished");

        Sweep {
            cost: self.problem.extract_cost(layer, &frontier),
            layers: layer,
            last: frontier,
            checkpoints,
        }
    }
}

impl<P> SweepEngine<P>
where
    P: LayeredRecurrence,
    P::Frontier: AsRef<[u64]>,
{
    /// Sweep until the final layer, keeping every frontier as one table row.
    ///
    /// Row `r` of the returned table is the frontier at layer `r`, so the
    /// table has `layers + 1` rows.
    pub(crate) fn tabulate(&self) -> (P::Cost, SubproblemTable) {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("sweep_tabulate");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier = self.problem.init_frontier();
        let mut table = SubproblemTable::with_width(frontier.as_ref().len());
        table.push_row(frontier.as_ref());
        let mut layer = 0usize;

        while !self.problem.is_final(layer, &frontier) {
            frontier = self.problem.forward_step(layer, &frontier);
            layer += 1;
            table.push_row(frontier.as_ref());
        }

        (self.problem.extract_cost(layer, &frontier), table)
    }
}

impl<P: LayeredRecurrence> Sweep<P> {
    /// Objective value at the final layer.
    pub fn cost(&self) -> P::Cost {
        self.cost
    }

    /// Index of the final layer (number of forward steps taken).
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Frontier at the final layer.
    pub fn final_frontier(&self) -> &P::Frontier {
        &self.last
    }

    /// Retained checkpoints, sorted by layer.
    pub fn checkpoints(&self) -> &[Checkpoint<P::Frontier>] {
        &self.checkpoints
    }

    /// Recover the frontier at `layer` by replaying from the nearest
    /// checkpoint at or below it.
    ///
    /// `problem` must be the recurrence this sweep was produced from.
    /// Returns `None` if `layer` lies past the final layer.
    pub fn frontier_at(&self, problem: &P, layer: usize) -> Option<P::Frontier> {
        if layer > self.layers {
            return None;
        }
        if layer == self.layers {
            return Some(self.last.clone());
        }

        let idx = nearest_at_or_below(&self.checkpoints, layer)?;
        let start = &self.checkpoints[idx];
        let steps = start.distance_to(layer)?;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("replay", from = start.layer, to = layer, steps);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut frontier = start.frontier.clone();
        for l in start.layer..start.layer + steps {
            frontier = problem.forward_step(l, &frontier);
        }
        Some(frontier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pascal's triangle rows, stopping once the centre entry reaches `target`.
    struct Pascal {
        target: u64,
    }

    impl LayeredRecurrence for Pascal {
        type Frontier = Vec<u64>;
        type Cost = usize;

        fn init_frontier(&self) -> Vec<u64> {
            vec![1]
        }

        fn forward_step(&self, _layer: usize, prev: &Vec<u64>) -> Vec<u64> {
            let mut next = vec![1u64; prev.len() + 1];
            for k in 1..prev.len() {
                next[k] = prev[k - 1] + prev[k];
            }
            next
        }

        fn is_final(&self, layer: usize, frontier: &Vec<u64>) -> bool {
            layer % 2 == 0 && frontier[layer / 2] >= self.target
        }

        fn extract_cost(&self, layer: usize, _frontier: &Vec<u64>) -> usize {
            layer
        }
    }

    /// Fixed-width counter; every layer adds the layer index to each cell.
    struct Ramp {
        layers: usize,
    }

    impl LayeredRecurrence for Ramp {
        type Frontier = Vec<u64>;
        type Cost = u64;

        fn init_frontier(&self) -> Vec<u64> {
            vec![0, 1, 2]
        }

        fn forward_step(&self, layer: usize, prev: &Vec<u64>) -> Vec<u64> {
            prev.iter().map(|v| v + layer as u64).collect()
        }

        fn is_final(&self, layer: usize, _frontier: &Vec<u64>) -> bool {
            layer == self.layers
        }

        fn extract_cost(&self, _layer: usize, frontier: &Vec<u64>) -> u64 {
            frontier[2]
        }

        fn layer_hint(&self) -> Option<usize> {
            Some(self.layers)
        }
    }

    #[test]
    fn stops_at_first_final_layer() {
        // Central binomials: 1, 2, 6, 20, 70 at layers 0, 2, 4, 6, 8.
        let sweep = SweepEngine::new(Pascal { target: 20 }).run();
        assert_eq!(sweep.cost(), 6);
        assert_eq!(sweep.layers(), 6);
        assert_eq!(sweep.final_frontier(), &vec![1, 6, 15, 20, 15, 6, 1]);
    }

    #[test]
    fn final_at_layer_zero_takes_no_steps() {
        let sweep = SweepEngine::new(Ramp { layers: 0 }).run();
        assert_eq!(sweep.layers(), 0);
        assert_eq!(sweep.cost(), 2);
        assert_eq!(sweep.checkpoints().len(), 1);
    }

    #[test]
    fn default_interval_uses_layer_hint() {
        let engine = SweepEngine::new(Ramp { layers: 100 });
        assert_eq!(engine.checkpoint_interval(), 10);
        let sweep = engine.run();
        let layers: Vec<usize> = sweep.checkpoints().iter().map(|c| c.layer).collect();
        assert_eq!(layers, (0..=100).step_by(10).collect::<Vec<_>>());
    }

    #[test]
    fn replay_matches_full_table_for_every_interval() {
        let problem = Ramp { layers: 23 };
        let (cost, table) = SweepEngine::new(Ramp { layers: 23 }).tabulate();
        assert_eq!(table.rows(), 24);
        for interval in 1..=25 {
            let engine = SweepEngine::with_checkpoint_interval(Ramp { layers: 23 }, interval);
            let sweep = engine.run();
            assert_eq!(sweep.cost(), cost);
            for layer in 0..=23 {
                let f = sweep.frontier_at(&problem, layer).unwrap();
                assert_eq!(f.as_slice(), table.row(layer), "interval={interval} layer={layer}");
            }
            assert!(sweep.frontier_at(&problem, 24).is_none());
        }
    }

    #[test]
    fn replay_never_exceeds_one_interval() {
        for interval in [1, 3, 7] {
            let sweep = SweepEngine::with_checkpoint_interval(Ramp { layers: 40 }, interval).run();
            for layer in 0..=40 {
                let idx = nearest_at_or_below(sweep.checkpoints(), layer).unwrap();
                let steps = sweep.checkpoints()[idx].distance_to(layer).unwrap();
                assert!(steps < interval, "interval={interval} layer={layer}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "checkpoint_interval must be positive")]
    fn zero_interval_panics() {
        let _ = SweepEngine::with_checkpoint_interval(Ramp { layers: 3 }, 0);
    }
}
