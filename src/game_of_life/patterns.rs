//! Collection of preset starting worlds

use super::Grid;
use std::ops::Range;
use thiserror::Error;

/// Size used by the presets that don't need a particular shape
const WORLD_SIZE: (usize, usize) = (29, 49);

/// Highest preset id
pub const MAX_PATTERN_ID: u32 = 11;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unknown pattern id {0} (expected 0..=11)")]
    UnknownPattern(u32),
    #[error("pattern source unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can hand out a starting world by id
pub trait PatternSource {
    fn pattern(&self, id: u32) -> Result<Grid, PatternError>;
}

/// Short description of a preset, for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternInfo {
    pub id: u32,
    pub name: &'static str,
    pub kind: &'static str,
}

/// The built-in preset library
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinPatterns;

impl BuiltinPatterns {
    pub fn catalog() -> &'static [PatternInfo] {
        static CATALOG: [PatternInfo; 12] = [
            PatternInfo { id: 0, name: "Cross", kind: "default" },
            PatternInfo { id: 1, name: "Blocks, tub, boat, loaf, beehives", kind: "still lifes" },
            PatternInfo { id: 2, name: "Toad, beacon, pentadecathlon, fountain", kind: "oscillators" },
            PatternInfo { id: 3, name: "Interlocking bars", kind: "oscillator" },
            PatternInfo { id: 4, name: "Lightweight spaceship and glider", kind: "moving" },
            PatternInfo { id: 5, name: "R-pentomino", kind: "methuselah" },
            PatternInfo { id: 6, name: "Offset lattice", kind: "other" },
            PatternInfo { id: 7, name: "Mixed lattice", kind: "other" },
            PatternInfo { id: 8, name: "Stripes", kind: "other" },
            PatternInfo { id: 9, name: "Double cross", kind: "other" },
            PatternInfo { id: 10, name: "Checkerboard", kind: "other" },
            PatternInfo { id: 11, name: "Pulsar", kind: "oscillator" },
        ];
        &CATALOG
    }
}

impl PatternSource for BuiltinPatterns {
    fn pattern(&self, id: u32) -> Result<Grid, PatternError> {
        let world = match id {
            0 => cross(),
            1 => still_lifes(),
            2 => oscillators(),
            3 => interlocking_bars(),
            4 => spaceships(),
            5 => r_pentomino(),
            6 => lattice(2, 2),
            7 => lattice(3, 3),
            8 => stripes(),
            9 => double_cross(),
            10 => checkerboard(),
            11 => pulsar(),
            other => return Err(PatternError::UnknownPattern(other)),
        };
        Ok(world)
    }
}

fn empty_world() -> Grid {
    Grid::new(WORLD_SIZE.0, WORLD_SIZE.1)
}

fn alive(grid: &mut Grid, cells: &[(usize, usize)]) {
    for &(row, col) in cells {
        grid.set(row, col, true);
    }
}

fn block(grid: &mut Grid, rows: Range<usize>, cols: Range<usize>) {
    grid.fill(rows, cols, true);
}

/// Set every cell whose row and column fall on the given strided sequences
fn strided(grid: &mut Grid, rows: (usize, usize), cols: (usize, usize), alive: bool) {
    let (row_start, row_step) = rows;
    let (col_start, col_step) = cols;
    for row in (row_start..grid.rows()).step_by(row_step) {
        for col in (col_start..grid.cols()).step_by(col_step) {
            grid.set(row, col, alive);
        }
    }
}

fn cross() -> Grid {
    let mut world = empty_world();
    let (rows, cols) = world.dimensions();
    block(&mut world, 0..rows, 19..20);
    block(&mut world, 15..16, 0..cols);
    world
}

fn still_lifes() -> Grid {
    let mut world = Grid::new(25, 25);

    // blocks
    block(&mut world, 1..3, 1..3);
    block(&mut world, 4..6, 6..8);

    // tub
    alive(&mut world, &[(18, 15), (20, 15), (19, 14), (19, 16)]);

    // boat
    alive(&mut world, &[(16, 6), (17, 7), (16, 8)]);
    block(&mut world, 15..16, 6..8);

    // loaf
    block(&mut world, 3..4, 17..19);
    block(&mut world, 4..6, 19..20);
    alive(&mut world, &[(4, 16), (5, 17), (6, 18)]);

    // beehives
    alive(&mut world, &[(22, 4), (22, 7)]);
    block(&mut world, 21..22, 5..7);
    block(&mut world, 23..24, 5..7);

    block(&mut world, 10..11, 11..13);
    block(&mut world, 11..13, 10..11);
    block(&mut world, 11..13, 13..14);
    block(&mut world, 13..14, 11..13);

    world
}

fn oscillators() -> Grid {
    let mut world = Grid::new(30, 30);

    // toad
    block(&mut world, 2..3, 19..22);
    block(&mut world, 3..4, 18..21);

    // beacon
    block(&mut world, 10..12, 22..24);
    block(&mut world, 12..14, 24..26);

    // pentadecathlon
    block(&mut world, 17..25, 4..7);
    world.set(18, 5, false);
    world.set(23, 5, false);

    // fountain
    block(&mut world, 25..26, 19..26);
    world.set(25, 22, false);
    alive(
        &mut world,
        &[(24, 19), (24, 25), (23, 21), (23, 23), (21, 19), (21, 25)],
    );
    block(&mut world, 22..23, 20..22);
    block(&mut world, 22..23, 23..25);

    block(&mut world, 4..7, 4..7);
    world.set(5, 5, false);

    world
}

fn interlocking_bars() -> Grid {
    let mut world = Grid::new(18, 20);
    block(&mut world, 4..6, 5..11);
    block(&mut world, 7..13, 5..7);
    block(&mut world, 11..13, 8..14);
    block(&mut world, 4..10, 12..14);
    world
}

fn spaceships() -> Grid {
    let mut world = empty_world();

    // lightweight spaceship
    block(&mut world, 6..7, 3..7);
    alive(&mut world, &[(5, 2), (3, 2), (3, 5)]);
    block(&mut world, 4..6, 6..7);

    // glider
    block(&mut world, 12..13, 4..7);
    alive(&mut world, &[(11, 6), (10, 5)]);

    world
}

fn r_pentomino() -> Grid {
    let mut world = empty_world();
    block(&mut world, 14..15, 30..32);
    block(&mut world, 15..16, 29..31);
    world.set(16, 30, true);
    world
}

/// Odd rows on even columns, plus every `row_step`-th row on `col_step`-spaced columns from 1
fn lattice(row_step: usize, col_step: usize) -> Grid {
    let mut world = empty_world();
    strided(&mut world, (1, 2), (0, 2), true);
    strided(&mut world, (0, row_step), (1, col_step), true);
    world
}

fn stripes() -> Grid {
    let mut world = empty_world();
    strided(&mut world, (0, 1), (1, 2), true);
    world
}

fn double_cross() -> Grid {
    let mut world = empty_world();
    let (rows, cols) = world.dimensions();
    block(&mut world, 0..rows, 15..18);
    block(&mut world, 14..17, 0..cols);
    world.fill(0..rows, 16..17, false);
    world.fill(15..16, 0..cols, false);
    world
}

fn checkerboard() -> Grid {
    let mut world = empty_world();
    strided(&mut world, (0, 2), (0, 2), true);
    strided(&mut world, (1, 2), (1, 2), true);
    world
}

fn pulsar() -> Grid {
    let mut world = Grid::new(17, 17);
    for row in [2, 7, 9, 14] {
        block(&mut world, row..row + 1, 4..7);
        block(&mut world, row..row + 1, 10..13);
    }
    for col in [2, 7, 9, 14] {
        block(&mut world, 4..7, col..col + 1);
        block(&mut world, 10..13, col..col + 1);
    }
    world
}
