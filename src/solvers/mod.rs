//! The two egg-drop formulations.
//!
//! Both implement [`LayeredRecurrence`](crate::traits::LayeredRecurrence) and
//! always agree on the answer:
//! - [`worst_case`] : minimize the worst-case drop count over the first-drop
//!   floor, one egg count per layer, `O(eggs · floors · log floors)` time.
//! - [`coverage`]   : maximize floors covered per drop count, one drop per
//!   layer, `O(eggs · answer)` time.

pub mod coverage;
pub mod worst_case;
