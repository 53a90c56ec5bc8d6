//! Validated egg-drop instances.

use crate::error::{EggDropError, Result};
use crate::utils::floor_bit_length;
use std::mem::size_of;

/// A validated `(eggs, floors)` pair.
///
/// Only constructible through [`Problem::new`], so every instance satisfies
/// `eggs >= 1`. `floors == 0` is a valid degenerate instance (answer: 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Problem {
    eggs: u64,
    floors: u64,
}

impl Problem {
    /// Validate a raw query.
    ///
    /// # Errors
    /// [`EggDropError::InvalidEggCount`] if `eggs < 1`,
    /// [`EggDropError::InvalidFloorCount`] if `floors < 0`.
    pub fn new(eggs: i64, floors: i64) -> Result<Self> {
        if eggs < 1 {
            return Err(EggDropError::InvalidEggCount(eggs));
        }
        if floors < 0 {
            return Err(EggDropError::InvalidFloorCount(floors));
        }
        Ok(Self {
            eggs: eggs as u64,
            floors: floors as u64,
        })
    }

    pub fn eggs(&self) -> u64 {
        self.eggs
    }

    pub fn floors(&self) -> u64 {
        self.floors
    }

    /// Egg count clamped to the point where extra eggs stop helping.
    ///
    /// With `b = ceil(log2(floors + 1))` eggs a plain bisection already needs
    /// only `b` drops, which is also the information-theoretic lower bound,
    /// so every egg count `>= b` has the same answer and the same table
    /// columns up to `b`. Always in `1..=64`.
    pub fn effective_eggs(&self) -> usize {
        let bits = floor_bit_length(self.floors).max(1);
        self.eggs.min(bits as u64) as usize
    }

    /// Table width for the worst-case formulation (`floors + 1` columns).
    ///
    /// # Errors
    /// [`EggDropError::TableTooLarge`] if a row of that many `u64` cells
    /// exceeds the largest allocation this target allows (`isize::MAX` bytes).
    pub fn table_width(&self) -> Result<usize> {
        let max_cells = isize::MAX as usize / size_of::<u64>();
        usize::try_from(self.floors)
            .ok()
            .and_then(|f| f.checked_add(1))
            .filter(|&width| width <= max_cells)
            .ok_or(EggDropError::TableTooLarge {
                floors: self.floors,
            })
    }
}

impl TryFrom<(i64, i64)> for Problem {
    type Error = EggDropError;

    fn try_from((eggs, floors): (i64, i64)) -> Result<Self> {
        Problem::new(eggs, floors)
    }
}
