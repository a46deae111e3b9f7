//! Conway's Game of Life player
//!
//! This library evolves a bounded, zero-padded Game of Life world one
//! generation per tick and hands every generation to a renderer.

pub mod animation;
pub mod config;
pub mod game_of_life;
pub mod render;
pub mod simulation;
pub mod utils;

pub use animation::{RunSummary, StopHandle};
pub use config::Settings;
pub use simulation::Simulation;

use animation::{KeyPacer, RawMode, TerminalEvents, ThreadPacer};
use anyhow::Result;
use config::RendererKind;
use game_of_life::BuiltinPatterns;
use render::{HeadlessRenderer, TerminalRenderer};
use utils::ColorOutput;

/// Main entry point: build the simulation described by `settings` and run it
/// on the configured renderer until it stops.
///
/// Terminal runs put the terminal in raw mode and stop on `q`, `Esc` or
/// `Ctrl-C`; `stop` can also be triggered from another thread.
pub fn play(settings: &Settings, stop: StopHandle) -> Result<RunSummary> {
    let simulation = Simulation::new(settings, &BuiltinPatterns);

    match settings.display.renderer {
        RendererKind::Headless => simulation.run(&mut HeadlessRenderer::new(), ThreadPacer, stop),
        RendererKind::Terminal => {
            let color = settings.display.color.enabled(ColorOutput::supports_color());
            let mut renderer = TerminalRenderer::new(std::io::stdout(), color)
                .with_clear_screen(settings.display.clear_screen)
                .with_alternate_screen(settings.display.clear_screen);

            match RawMode::enable() {
                Ok(_raw) => {
                    let pacer = KeyPacer::new(TerminalEvents, stop.clone());
                    simulation.run(&mut renderer, pacer, stop)
                }
                Err(e) => {
                    log::info!("{:#}; keyboard controls disabled", e);
                    simulation.run(&mut renderer, ThreadPacer, stop)
                }
            }
        }
    }
}
