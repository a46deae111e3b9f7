//! Configuration settings for the Game of Life player

use crate::animation::FrameLimit;
use crate::game_of_life::{DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Delay between frames when none (or a non-positive one) is configured
pub const DEFAULT_STEP_TIME_MS: u64 = 300;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub world: WorldConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Positive values run that many frames; anything else runs until stopped
    pub step_number: i64,
    /// Show the iteration counter as a title
    pub show_iter: bool,
    /// Milliseconds between frames; non-positive values fall back to the default
    pub step_time: i64,
}

/// Where the starting world comes from. A world file wins over a pattern id;
/// with neither set a random world is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub pattern: Option<u32>,
    pub file: Option<PathBuf>,
    pub random_rows: usize,
    pub random_cols: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub renderer: RendererKind,
    pub color: ColorMode,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    Terminal,
    Headless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, terminal_supports_color: bool) -> bool {
        match self {
            ColorMode::Auto => terminal_supports_color,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_number: 0,
            show_iter: false,
            step_time: DEFAULT_STEP_TIME_MS as i64,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            pattern: None,
            file: None,
            random_rows: DEFAULT_ROWS,
            random_cols: DEFAULT_COLS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            renderer: RendererKind::Terminal,
            color: ColorMode::Auto,
            clear_screen: true,
        }
    }
}

/// Run parameters after defaults have been applied to out-of-range values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    pub frame_limit: FrameLimit,
    pub show_iter: bool,
    pub step_time: Duration,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings.
    ///
    /// Out-of-range frame counts and step times are not errors; they are
    /// normalized by [`Settings::play_options`].
    pub fn validate(&self) -> Result<()> {
        if self.world.pattern.is_some() && self.world.file.is_some() {
            anyhow::bail!("world.pattern and world.file are mutually exclusive");
        }

        let (rows, cols) = (self.world.random_rows, self.world.random_cols);
        if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&cols) {
            anyhow::bail!(
                "world.random_rows and world.random_cols must be between 1 and {} (got {}x{})",
                MAX_DIMENSION,
                rows,
                cols
            );
        }
        // a single cell can't hold both a live and a dead cell
        if rows * cols < 2 {
            anyhow::bail!("random world must have at least two cells");
        }
        Ok(())
    }

    /// Normalized run parameters
    pub fn play_options(&self) -> PlayOptions {
        PlayOptions {
            frame_limit: FrameLimit::from_step_number(self.simulation.step_number),
            show_iter: self.simulation.show_iter,
            step_time: step_time_or_default(self.simulation.step_time),
        }
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(pattern) = cli_overrides.pattern {
            self.world.pattern = Some(pattern);
            self.world.file = None;
        }
        if let Some(ref file) = cli_overrides.world_file {
            self.world.file = Some(file.clone());
            self.world.pattern = None;
        }
        if let Some(step_number) = cli_overrides.step_number {
            self.simulation.step_number = step_number;
        }
        if let Some(step_time) = cli_overrides.step_time {
            self.simulation.step_time = step_time;
        }
        if cli_overrides.show_iter {
            self.simulation.show_iter = true;
        }
        if cli_overrides.headless {
            self.display.renderer = RendererKind::Headless;
        }
        if let Some(color) = cli_overrides.color {
            self.display.color = color;
        }
    }
}

/// Positive millisecond values are kept; anything else becomes the default
pub fn step_time_or_default(step_time_ms: i64) -> Duration {
    match u64::try_from(step_time_ms) {
        Ok(ms) if ms > 0 => Duration::from_millis(ms),
        _ => Duration::from_millis(DEFAULT_STEP_TIME_MS),
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub pattern: Option<u32>,
    pub world_file: Option<PathBuf>,
    pub step_number: Option<i64>,
    pub step_time: Option<i64>,
    pub show_iter: bool,
    pub headless: bool,
    pub color: Option<ColorMode>,
}
