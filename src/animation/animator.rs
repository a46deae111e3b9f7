//! Host loop that ticks a driver at a fixed cadence

use super::driver::{Driver, StopReason, Tick};
use crate::render::Renderer;
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Waits between ticks
pub trait Pacer {
    fn wait(&mut self, interval: Duration) -> Result<()>;
}

/// Sleeps the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&mut self, interval: Duration) -> Result<()> {
        std::thread::sleep(interval);
        Ok(())
    }
}

/// Shared flag to cancel a running animation between ticks
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub reason: StopReason,
}

/// Drives a [`Driver`] to completion, one tick per `step_time`.
pub struct Animator<P: Pacer> {
    pacer: P,
    step_time: Duration,
    show_iter: bool,
    stop: StopHandle,
}

impl<P: Pacer> Animator<P> {
    pub fn new(pacer: P, step_time: Duration, show_iter: bool) -> Self {
        Self {
            pacer,
            step_time,
            show_iter,
            stop: StopHandle::new(),
        }
    }

    /// Use an externally owned stop handle
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run until the driver stops.
    ///
    /// The renderer is opened with the starting world before the first tick
    /// and closed exactly once afterwards, including when drawing fails.
    pub fn run<R: Renderer + ?Sized>(&mut self, driver: &mut Driver<'_>, renderer: &mut R) -> Result<RunSummary> {
        renderer.begin(driver.grid())?;
        log::debug!(
            "animation started: limit {:?}, step time {:?}",
            driver.iteration().max_frames,
            self.step_time
        );

        let outcome = self.tick_until_stopped(driver, renderer);
        let finished = renderer.finish();
        let reason = outcome?;
        finished?;

        log::info!("animation stopped after {} frames ({:?})", driver.frame_index(), reason);
        Ok(RunSummary {
            frames: driver.frame_index(),
            reason,
        })
    }

    fn tick_until_stopped<R: Renderer + ?Sized>(
        &mut self,
        driver: &mut Driver<'_>,
        renderer: &mut R,
    ) -> Result<StopReason> {
        loop {
            if self.stop.is_stopped() {
                driver.stop();
            }

            match driver.tick(renderer, self.show_iter)? {
                Tick::Stopped(reason) => return Ok(reason),
                Tick::Frame(_) if driver.is_stopped() => continue,
                Tick::Frame(_) => self.pacer.wait(self.step_time)?,
            }
        }
    }
}
