//! Square grid of colored cells

use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::consts::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::error::{PuzzleError, Result};

/// An N×N grid stored row-major in a flat buffer.
///
/// Serialized as a list of rows so front ends can index `grid[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Color>>", into = "Vec<Vec<Color>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Create an all-Empty grid
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(PuzzleError::InvalidGridSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Color::Empty; size * size],
        })
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether (row, col) lies on the grid. Signed so neighbors past the
    /// border can be tested directly.
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    /// Mix `color` into one cell; off-grid coordinates are ignored
    pub(crate) fn paint(&mut self, row: i32, col: i32, color: Color) {
        if self.contains(row, col) {
            let idx = row as usize * self.size + col as usize;
            self.cells[idx] = self.cells[idx].mix(color);
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.size)
    }

    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// True when no cell has been painted
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == Color::Empty)
    }
}

impl TryFrom<Vec<Vec<Color>>> for Grid {
    type Error = PuzzleError;

    fn try_from(rows: Vec<Vec<Color>>) -> Result<Self> {
        let size = rows.len();
        let mut grid = Grid::new(size)?;
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != size {
                return Err(PuzzleError::RaggedGrid {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            grid.cells[row * size..(row + 1) * size].copy_from_slice(&cells);
        }
        Ok(grid)
    }
}

impl From<Grid> for Vec<Vec<Color>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[Color]>::to_vec).collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(Color::symbol).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Create an all-Empty `size`×`size` grid
pub fn create_empty_grid(size: usize) -> Result<Grid> {
    Grid::new(size)
}

/// Exact cell-for-cell equality; grids of different size never match
pub fn check_win(current: &Grid, target: &Grid) -> bool {
    current == target
}
