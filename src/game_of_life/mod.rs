//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod neighborhood;
pub mod patterns;
pub mod rules;

pub use grid::{Grid, GridError, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION};
pub use io::{create_example_worlds, load_world_from_file, save_grid_to_file};
pub use neighborhood::{Neighborhood, MOORE};
pub use patterns::{BuiltinPatterns, PatternError, PatternInfo, PatternSource};
pub use rules::StepEngine;
