//! Game of Life update rule

use super::{Grid, Neighborhood};

/// Neighbor counts that keep a live cell alive
pub const SURVIVAL_COUNTS: [u8; 2] = [2, 3];
/// Neighbor count that brings a dead cell to life
pub const BIRTH_COUNT: u8 = 3;

/// Game of Life step engine (B3/S23, zero-padded border)
pub struct StepEngine;

impl StepEngine {
    /// Evolve the grid one generation forward.
    ///
    /// Every cell is computed from `current`, so the update is synchronous and
    /// the returned grid has the same shape.
    pub fn step(current: &Grid, neighborhood: &Neighborhood) -> Grid {
        let mut next = Grid::new(current.rows(), current.cols());
        Self::step_into(current, neighborhood, &mut next);
        next
    }

    /// Evolve `current` into `next`, reusing its buffer. `next` is reshaped if needed.
    pub fn step_into(current: &Grid, neighborhood: &Neighborhood, next: &mut Grid) {
        if next.dimensions() != current.dimensions() {
            *next = Grid::new(current.rows(), current.cols());
        }

        let cols = current.cols();
        for (idx, out) in next.cells_mut().iter_mut().enumerate() {
            let (row, col) = (idx / cols, idx % cols);
            let count = Self::neighbor_count(current, neighborhood, row, col);
            *out = Self::next_state(current.cells()[idx], count);
        }
    }

    /// Count live neighbors selected by the mask; cells beyond the border count as dead
    pub fn neighbor_count(grid: &Grid, neighborhood: &Neighborhood, row: usize, col: usize) -> u8 {
        neighborhood
            .offsets()
            .map(|(dr, dc)| grid.get_padded(row as isize + dr, col as isize + dc))
            .sum()
    }

    /// Next value of a cell given its current value and live neighbor count
    pub fn next_state(value: u8, count: u8) -> u8 {
        match (value, count) {
            (1, c) if SURVIVAL_COUNTS.contains(&c) => 1,
            (0, BIRTH_COUNT) => 1,
            _ => 0,
        }
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, neighborhood: &Neighborhood, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::step(&grid, neighborhood);
        }
        grid
    }
}
