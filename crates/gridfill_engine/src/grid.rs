//! Fixed size boolean occupancy grid
//!
//! The grid is the only mutable state shared by the rasterizer and the fill
//! strategies. Cells start unmarked and can only ever become marked.

use crate::{GridError, Point, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: i32,
    rows: i32,
    /// Row major, `y * columns + x`.
    cells: Vec<bool>,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be positive.
    pub fn new(columns: i32, rows: i32) -> Result<Self> {
        if columns <= 0 || rows <= 0 {
            return Err(GridError::InvalidDimensions { columns, rows });
        }
        Ok(Self {
            columns,
            rows,
            cells: vec![false; columns as usize * rows as usize],
        })
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Check if a coordinate lies within `[0, columns) x [0, rows)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.columns && y < self.rows
    }

    pub fn contains_point(&self, pos: Point) -> bool {
        self.contains(pos.x, pos.y)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(cell_index(self.columns, x, y))
    }

    pub fn is_marked(&self, x: i32, y: i32) -> Result<bool> {
        match self.index(x, y) {
            Some(i) => Ok(self.cells[i]),
            None => Err(GridError::OutOfBounds { x, y }),
        }
    }

    /// Mark a cell.
    ///
    /// Returns `Ok(true)` if the cell changed and `Ok(false)` if it was
    /// already marked.
    pub fn mark(&mut self, x: i32, y: i32) -> Result<bool> {
        let Some(i) = self.index(x, y) else {
            return Err(GridError::OutOfBounds { x, y });
        };
        if self.cells[i] {
            return Ok(false);
        }
        self.cells[i] = true;
        Ok(true)
    }

    /// Fast path for the fill loops: in bounds and not yet marked.
    ///
    /// Out of range coordinates are simply "not free" so callers can probe
    /// neighbors without a bounds check of their own.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| !self.cells[i])
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// All marked cells in row major order.
    pub fn marked_points(&self) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(i, _)| {
                let columns = self.columns as usize;
                Point::new((i % columns) as i32, (i / columns) as i32)
            })
            .collect()
    }
}

/// Row major index of an in-bounds cell, computed in `usize` so grids with
/// more than `i32::MAX` cells don't overflow.
fn cell_index(columns: i32, x: i32, y: i32) -> usize {
    y as usize * columns as usize + x as usize
}
