//! Dense row-major table of subproblem results.
//!
//! Rows are appended in dependency order by
//! [`SweepEngine::tabulate`](crate::engine::SweepEngine::tabulate); each row
//! is the frontier of one layer. The table never leaves the solver that
//! built it.

#[derive(Debug, Clone)]
pub(crate) struct SubproblemTable {
    width: usize,
    cells: Vec<u64>,
}

impl SubproblemTable {
    pub(crate) fn with_width(width: usize) -> Self {
        Self {
            width,
            cells: Vec::new(),
        }
    }

    /// Append one fully computed row.
    ///
    /// # Panics
    /// Panics if `row.len()` differs from the table width.
    pub(crate) fn push_row(&mut self, row: &[u64]) {
        assert_eq!(row.len(), self.width, "row width mismatch");
        self.cells.extend_from_slice(row);
    }

    pub(crate) fn rows(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.cells.len() / self.width
        }
    }

    pub(crate) fn row(&self, r: usize) -> &[u64] {
        let start = r * self.width;
        &self.cells[start..start + self.width]
    }

    #[inline]
    pub(crate) fn get(&self, r: usize, c: usize) -> u64 {
        debug_assert!(c < self.width);
        self.cells[r * self.width + c]
    }
}
