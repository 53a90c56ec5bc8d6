//! Checkpoint frontiers retained by a sweep.
//!
//! A `Checkpoint` pins the frontier at one layer so that later layers can be
//! recomputed from it instead of from layer 0.

/// Frontier snapshot at a given layer.
#[derive(Debug, Clone)]
pub struct Checkpoint<F> {
    /// Layer index this frontier belongs to.
    pub layer: usize,
    /// Frontier values at `layer`.
    pub frontier: F,
}

impl<F> Checkpoint<F> {
    /// Number of forward steps needed to reach `target` from this checkpoint,
    /// or `None` if `target` lies before it.
    #[inline]
    pub fn distance_to(&self, target: usize) -> Option<usize> {
        target.checked_sub(self.layer)
    }
}

/// Index of the last checkpoint at or below `layer`.
///
/// `checkpoints` must be sorted by layer, which is how
/// [`crate::engine::SweepEngine::run`] produces them.
pub(crate) fn nearest_at_or_below<F>(checkpoints: &[Checkpoint<F>], layer: usize) -> Option<usize> {
    let idx = checkpoints.partition_point(|c| c.layer <= layer);
    idx.checked_sub(1)
}
