//! Row-major 2-D grid shared by every stage of the pipeline

use crate::error::{PaintError, Result};

/// A dense row-major grid of `rows * cols` cells
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer. The buffer length must be `rows * cols`.
    pub fn new(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self> {
        match rows.checked_mul(cols) {
            Some(len) if len == cells.len() => Ok(Self { rows, cols, cells }),
            Some(len) => Err(PaintError::ShapeMismatch {
                expected: format!("{len} cells ({rows}x{cols})"),
                actual: format!("{} cells", cells.len()),
            }),
            None => Err(PaintError::ShapeMismatch {
                expected: format!("{rows}x{cols} cells, which overflows usize"),
                actual: format!("{} cells", cells.len()),
            }),
        }
    }

    /// Build a grid from nested rows; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(row_count * cols);

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(PaintError::ShapeMismatch {
                    expected: format!("{cols} columns"),
                    actual: format!("{} columns in row {index}", row.len()),
                });
            }
            cells.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid has zero rows or zero columns
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Iterate over the rows in top-to-bottom order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on zero, and a grid with no columns has no cells anyway
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Human-readable shape, used in error messages
    pub(crate) fn shape(&self) -> String {
        format!("{}x{}", self.rows, self.cols)
    }
}
