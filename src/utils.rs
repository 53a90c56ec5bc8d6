//! Small numeric helpers shared by the engine and the solvers.

/// Integer square-root-style checkpoint interval for `T` layers.
///
/// Used by [`crate::engine::SweepEngine::new`] so that a sweep keeps about
/// √T checkpoint frontiers and any layer can be replayed in at most √T steps.
#[inline]
pub fn default_checkpoint_interval(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

/// Number of bits needed to write `floors`, i.e. `ceil(log2(floors + 1))`.
///
/// This is the minimum drop count with unlimited eggs: each drop at best
/// halves the `floors + 1` candidate critical floors.
#[inline]
pub fn floor_bit_length(floors: u64) -> u32 {
    u64::BITS - floors.leading_zeros()
}
