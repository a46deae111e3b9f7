//! Grid representation and utilities for Game of Life

use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Rows of a randomly generated default world
pub const DEFAULT_ROWS: usize = 30;
/// Columns of a randomly generated default world
pub const DEFAULT_COLS: usize = 50;
/// Largest row or column count a grid may have
pub const MAX_DIMENSION: usize = 4096;

/// Reasons a candidate world is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("row {row} has length {found}, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("value {value} at ({row}, {col}) is not 0 or 1")]
    ValueOutOfRange { row: usize, col: usize, value: i64 },
    #[error("world must contain both live and dead cells")]
    Uniform,
    #[error("grid of {rows}x{cols} exceeds the {max}x{max} limit", max = MAX_DIMENSION)]
    TooLarge { rows: usize, cols: usize },
}

/// Represents a Game of Life grid.
///
/// Cells are stored row-major and always hold exactly 0 (dead) or 1 (alive).
/// The shape is fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create a new grid with every cell dead.
    ///
    /// Dimensions are clamped to `1..=MAX_DIMENSION`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.clamp(1, MAX_DIMENSION);
        let cols = cols.clamp(1, MAX_DIMENSION);
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Random grid using the thread-local generator
    pub fn random(rows: usize, cols: usize) -> Self {
        Self::random_with(rows, cols, &mut rand::rng())
    }

    /// Random grid where each cell is independently alive with probability 1/2
    pub fn random_with<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(rows, cols);
        for cell in grid.cells.iter_mut() {
            *cell = rng.random_range(0..=1);
        }
        grid
    }

    /// Random grid of the default world size
    pub fn random_default() -> Self {
        Self::random(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create a grid from integer rows, enforcing shape and the {0, 1} value domain
    pub fn from_rows(candidate: &[Vec<i64>]) -> Result<Self, GridError> {
        let rows = candidate.len();
        let cols = candidate.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(GridError::TooLarge { rows, cols });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (r, row) in candidate.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    found: row.len(),
                    expected: cols,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                match value {
                    0 | 1 => cells.push(value as u8),
                    _ => return Err(GridError::ValueOutOfRange { row: r, col: c, value }),
                }
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Parse a candidate world that must contain both a live and a dead cell
    pub fn from_world(candidate: &[Vec<i64>]) -> Result<Self, GridError> {
        Self::from_rows(candidate)?.into_world()
    }

    /// Check that an already shaped grid is usable as a starting world
    pub fn into_world(self) -> Result<Self, GridError> {
        if self.is_uniform() {
            return Err(GridError::Uniform);
        }
        Ok(self)
    }

    /// Whether a candidate is accepted as a starting world
    pub fn validate(candidate: &[Vec<i64>]) -> bool {
        Self::from_world(candidate).is_ok()
    }

    /// Accept a candidate world or substitute a random default-size grid
    pub fn world_or_random(candidate: &[Vec<i64>]) -> Self {
        Self::from_world(candidate).unwrap_or_else(|e| Self::random_fallback(&e))
    }

    /// Random default-size world standing in for a rejected one.
    ///
    /// Redrawn until it holds both a live and a dead cell.
    pub fn random_fallback(reason: &GridError) -> Self {
        log::info!("initial world rejected: {}; using a random world", reason);
        loop {
            let grid = Self::random_default();
            if !grid.is_uniform() {
                return grid;
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major cell buffer
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell value at coordinates; out of bounds cells are dead
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row < self.rows && col < self.cols {
            self.cells[self.index(row, col)]
        } else {
            0
        }
    }

    /// Cell value at signed coordinates, zero outside the grid
    #[inline]
    pub fn get_padded(&self, row: isize, col: isize) -> u8 {
        if row < 0 || col < 0 {
            return 0;
        }
        self.get(row as usize, col as usize)
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == 1
    }

    /// Set a cell; out of bounds writes are ignored and reported as `false`
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = u8::from(alive);
        true
    }

    /// Set every cell in a rectangular block (clipped to the grid)
    pub fn fill(&mut self, rows: std::ops::Range<usize>, cols: std::ops::Range<usize>, alive: bool) {
        for row in rows {
            for col in cols.clone() {
                self.set(row, col, alive);
            }
        }
    }

    /// Count total living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    /// True when all cells share one value (all dead or all alive)
    pub fn is_uniform(&self) -> bool {
        let population = self.population();
        population == 0 || population == self.cells.len()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let symbol = if self.is_alive(row, col) { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
