//! Configuration management for the Game of Life player

pub mod settings;

pub use settings::{
    step_time_or_default, CliOverrides, ColorMode, DisplayConfig, PlayOptions, RendererKind,
    Settings, SimulationConfig, WorldConfig, DEFAULT_STEP_TIME_MS,
};
