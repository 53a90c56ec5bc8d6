//! Core trait for layered recurrences.
//!
//! Both egg-drop formulations are dynamic programs whose table can be filled
//! one row ("layer") at a time, where each row depends only on the previous
//! row and on earlier cells of itself:
//! - worst-case minimization layers by egg count, the frontier being the
//!   row `T[i][0..=floors]`;
//! - coverage maximization layers by drop count, the frontier being the row
//!   `C[d][0..=eggs]`.
//!
//! Implement [`LayeredRecurrence`] for a struct holding the instance data and
//! let [`SweepEngine`](crate::engine::SweepEngine) drive it.

/// A dynamic program evaluated layer by layer until a stopping condition holds.
///
/// Semantics:
/// - The engine starts from `init_frontier()` at layer 0.
/// - While `is_final(layer, frontier)` is false, it applies
///   `forward_step(layer, frontier)` to obtain the frontier at `layer + 1`.
/// - The answer is `extract_cost(layer, frontier)` at the first final layer.
///
/// `forward_step` must be deterministic: the engine relies on replaying it
/// from a checkpoint to reproduce any intermediate frontier.
pub trait LayeredRecurrence {
    /// Representation of all DP values on one layer.
    type Frontier: Clone;

    /// Objective type.
    type Cost: Copy + Ord;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// One DP step: from layer `layer` to `layer + 1`.
    ///
    /// Must only depend on `frontier` and fixed instance data.
    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier;

    /// Whether the sweep stops at `layer`.
    ///
    /// Must eventually return true; the engine has no other bound on the
    /// number of layers.
    fn is_final(&self, layer: usize, frontier: &Self::Frontier) -> bool;

    /// Objective value read off the final frontier.
    fn extract_cost(&self, layer: usize, frontier: &Self::Frontier) -> Self::Cost;

    /// Number of layers the sweep will take, when known up front.
    ///
    /// Only used to size the default checkpoint interval.
    fn layer_hint(&self) -> Option<usize> {
        None
    }
}
