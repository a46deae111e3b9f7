//! Tick-by-tick simulation driver

use crate::game_of_life::{Grid, Neighborhood, StepEngine};
use crate::render::Renderer;
use anyhow::Result;
use std::num::NonZeroU64;

/// How many ticks a run performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameLimit {
    Finite(NonZeroU64),
    #[default]
    Unbounded,
}

impl FrameLimit {
    /// Positive counts are finite; zero and negative counts mean unbounded
    pub fn from_step_number(step_number: i64) -> Self {
        u64::try_from(step_number)
            .ok()
            .and_then(NonZeroU64::new)
            .map_or(FrameLimit::Unbounded, FrameLimit::Finite)
    }

    pub fn is_reached(&self, frame_index: u64) -> bool {
        match self {
            FrameLimit::Finite(max) => frame_index >= max.get(),
            FrameLimit::Unbounded => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    FrameLimitReached,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Ready,
    Running,
    Stopped(StopReason),
}

/// Iteration counter and bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IterationState {
    pub frame_index: u64,
    pub max_frames: FrameLimit,
}

/// Result of a call to [`Driver::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A frame was computed and rendered
    Frame(u64),
    /// The driver is stopped; nothing happened
    Stopped(StopReason),
}

/// Owns the current world and advances it one generation per tick.
///
/// The next generation is computed into a back buffer and swapped in before
/// the renderer sees it, so a renderer only ever observes complete states.
pub struct Driver<'n> {
    current: Grid,
    back: Grid,
    neighborhood: &'n Neighborhood,
    iteration: IterationState,
    state: DriverState,
}

impl<'n> Driver<'n> {
    pub fn new(initial: Grid, neighborhood: &'n Neighborhood, max_frames: FrameLimit) -> Self {
        let back = Grid::new(initial.rows(), initial.cols());
        Self {
            current: initial,
            back,
            neighborhood,
            iteration: IterationState {
                frame_index: 0,
                max_frames,
            },
            state: DriverState::Ready,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn iteration(&self) -> IterationState {
        self.iteration
    }

    pub fn frame_index(&self) -> u64 {
        self.iteration.frame_index
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.state, DriverState::Stopped(_))
    }

    /// Request a stop; takes effect before the next tick
    pub fn stop(&mut self) {
        if !self.is_stopped() {
            self.state = DriverState::Stopped(StopReason::Cancelled);
        }
    }

    /// Advance one generation and hand it to the renderer
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R, show_iter: bool) -> Result<Tick> {
        if let DriverState::Stopped(reason) = self.state {
            return Ok(Tick::Stopped(reason));
        }

        self.state = DriverState::Running;
        self.iteration.frame_index += 1;

        StepEngine::step_into(&self.current, self.neighborhood, &mut self.back);
        std::mem::swap(&mut self.current, &mut self.back);

        let frame_index = self.iteration.frame_index;
        if self.iteration.max_frames.is_reached(frame_index) {
            self.state = DriverState::Stopped(StopReason::FrameLimitReached);
        }

        renderer.draw(frame_index, &self.current, show_iter)?;
        Ok(Tick::Frame(frame_index))
    }

    /// Consume the driver, returning the last computed world
    pub fn into_grid(self) -> Grid {
        self.current
    }
}
