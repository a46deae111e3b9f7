//! Frame renderers driven once per tick

pub mod terminal;

pub use terminal::TerminalRenderer;

use crate::game_of_life::Grid;
use anyhow::Result;

/// Draws simulation frames.
///
/// `begin` is called once before the first tick with the starting world,
/// `draw` once per tick with the post-step world, and `finish` once when the
/// run stops. Implementations acquire their drawing surface in `begin` and
/// release it in `finish`.
pub trait Renderer {
    fn begin(&mut self, _initial: &Grid) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, frame_index: u64, grid: &Grid, show_iter: bool) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Renderer that only logs frame statistics
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last_population: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_population(&self) -> usize {
        self.last_population
    }
}

impl Renderer for HeadlessRenderer {
    fn begin(&mut self, initial: &Grid) -> Result<()> {
        self.last_population = initial.population();
        log::info!(
            "headless run on {}x{} world, {} alive",
            initial.rows(),
            initial.cols(),
            self.last_population
        );
        Ok(())
    }

    fn draw(&mut self, frame_index: u64, grid: &Grid, _show_iter: bool) -> Result<()> {
        self.frames += 1;
        self.last_population = grid.population();
        log::debug!("frame {}: {} alive", frame_index, self.last_population);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        log::info!(
            "headless run finished after {} frames, {} alive",
            self.frames,
            self.last_population
        );
        Ok(())
    }
}
