//! The paintable grid of palette references.

use tilecss::Side;

use crate::error::{ForgeError, Result};
use crate::palette::IndexRemap;
use crate::random::RandomSource;

/// `rows × cols` cells in row-major order, each empty or a palette index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<usize>>,
}

impl Grid {
    /// An empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The palette index at a cell; `None` for empty or out-of-bounds cells.
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if self.contains(row, col) {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// The palette index of the neighbour across `side`, if in bounds.
    pub fn neighbor(&self, row: usize, col: usize, side: Side) -> Option<usize> {
        let (dr, dc) = side.offset();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        self.get(row, col)
    }

    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }

    /// Cells grouped by row.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<usize>]> {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Number of cells holding `index`.
    pub fn count(&self, index: usize) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(index)).count()
    }

    /// Writes a cell. Returns `false` when out of bounds.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Option<usize>) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        self.cells[row * self.cols + col] = value;
        true
    }

    /// Empties every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fills each cell independently: empty with `empty_probability`,
    /// otherwise a uniformly random index below `palette_len`.
    pub(crate) fn randomize(
        &mut self,
        palette_len: usize,
        empty_probability: f64,
        rng: &mut impl RandomSource,
    ) {
        for cell in &mut self.cells {
            *cell = if palette_len == 0 || rng.chance(empty_probability) {
                None
            } else {
                Some(rng.below(palette_len))
            };
        }
    }

    /// Resizes to exactly `rows × cols`, keeping the overlapping top-left
    /// region and leaving new cells empty.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        let mut cells = vec![None; rows * cols];
        for row in 0..rows.min(self.rows) {
            for col in 0..cols.min(self.cols) {
                cells[row * cols + col] = self.cells[row * self.cols + col];
            }
        }
        self.rows = rows;
        self.cols = cols;
        self.cells = cells;
    }

    /// Rewrites every reference through `remap`, emptying removed ones.
    pub(crate) fn remap(&mut self, remap: &IndexRemap) {
        for cell in &mut self.cells {
            *cell = cell.and_then(|index| remap.get(index));
        }
    }

    /// Row-major nested form used by snapshots.
    pub fn to_nested(&self) -> Vec<Vec<Option<usize>>> {
        self.iter_rows().map(<[_]>::to_vec).collect()
    }

    /// Builds a grid from nested rows, which must all have the same length.
    pub fn from_nested(rows: Vec<Vec<Option<usize>>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|row| row.len() != cols) {
            return Err(ForgeError::InvalidSnapshot(format!(
                "row {bad} has {} cells, expected {cols}",
                rows[bad].len()
            )));
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}
