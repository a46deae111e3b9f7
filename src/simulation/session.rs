//! A configured simulation run: starting world plus run parameters

use crate::animation::{Animator, Driver, Pacer, RunSummary, StopHandle};
use crate::config::{PlayOptions, Settings, WorldConfig};
use crate::game_of_life::{
    load_world_from_file, Grid, GridError, PatternError, PatternSource, MOORE,
};
use crate::render::Renderer;
use anyhow::Result;
use std::path::PathBuf;

/// Where the starting world came from after fallbacks were applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldOrigin {
    Random,
    Pattern(u32),
    File(PathBuf),
    /// A supplied world was rejected and replaced by a random one
    RandomFallback,
}

/// A ready-to-run simulation
#[derive(Debug, Clone)]
pub struct Simulation {
    world: Grid,
    origin: WorldOrigin,
    options: PlayOptions,
}

impl Simulation {
    /// Build a simulation from settings.
    ///
    /// A failed pattern or world-file lookup discards the settings and falls
    /// back to the default run (random world, unbounded). A world that loads
    /// but isn't valid is replaced by a random world while the rest of the
    /// settings are kept.
    pub fn new(settings: &Settings, patterns: &dyn PatternSource) -> Self {
        match lookup_world(&settings.world, patterns) {
            Ok(candidate) => Self::with_candidate(settings, candidate),
            Err(e) => {
                log::info!("{}; falling back to the default random run", e);
                let defaults = Settings::default();
                Self::with_candidate(&defaults, Candidate::Random)
            }
        }
    }

    fn with_candidate(settings: &Settings, candidate: Candidate) -> Self {
        let (world, origin) = match candidate {
            Candidate::Random => (
                Grid::random(settings.world.random_rows, settings.world.random_cols),
                WorldOrigin::Random,
            ),
            Candidate::Pattern(id, grid) => accept_or_fallback(grid.into_world(), WorldOrigin::Pattern(id)),
            Candidate::File(path, raw) => accept_or_fallback(Grid::from_world(&raw), WorldOrigin::File(path)),
        };

        log::info!(
            "starting world {:?}: {}x{}, {} alive",
            origin,
            world.rows(),
            world.cols(),
            world.population()
        );

        Self {
            world,
            origin,
            options: settings.play_options(),
        }
    }

    pub fn world(&self) -> &Grid {
        &self.world
    }

    pub fn origin(&self) -> &WorldOrigin {
        &self.origin
    }

    pub fn options(&self) -> &PlayOptions {
        &self.options
    }

    /// Run to completion with the given renderer and pacer
    pub fn run<R, P>(self, renderer: &mut R, pacer: P, stop: StopHandle) -> Result<RunSummary>
    where
        R: Renderer + ?Sized,
        P: Pacer,
    {
        let mut driver = Driver::new(self.world, &MOORE, self.options.frame_limit);
        let mut animator = Animator::new(pacer, self.options.step_time, self.options.show_iter)
            .with_stop_handle(stop);
        animator.run(&mut driver, renderer)
    }
}

enum Candidate {
    Random,
    Pattern(u32, Grid),
    File(PathBuf, Vec<Vec<i64>>),
}

fn lookup_world(world: &WorldConfig, patterns: &dyn PatternSource) -> Result<Candidate, PatternError> {
    if let Some(ref path) = world.file {
        let raw = load_world_from_file(path).map_err(|e| PatternError::Unavailable(format!("{:#}", e)))?;
        return Ok(Candidate::File(path.clone(), raw));
    }
    if let Some(id) = world.pattern {
        return patterns.pattern(id).map(|grid| Candidate::Pattern(id, grid));
    }
    Ok(Candidate::Random)
}

fn accept_or_fallback(candidate: Result<Grid, GridError>, origin: WorldOrigin) -> (Grid, WorldOrigin) {
    match candidate {
        Ok(grid) => (grid, origin),
        Err(e) => {
            log::info!("{:?} can't be used as a starting world", origin);
            (Grid::random_fallback(&e), WorldOrigin::RandomFallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{FrameLimit, StopReason};
    use crate::game_of_life::{BuiltinPatterns, DEFAULT_COLS, DEFAULT_ROWS};
    use std::io::Write;
    use std::num::NonZeroU64;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    struct NoPatterns;

    impl PatternSource for NoPatterns {
        fn pattern(&self, _id: u32) -> Result<Grid, PatternError> {
            Err(PatternError::Unavailable("no library".to_string()))
        }
    }

    struct NoWait;

    impl Pacer for NoWait {
        fn wait(&mut self, _interval: Duration) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct Indices(Vec<u64>);

    impl Renderer for Indices {
        fn draw(&mut self, frame_index: u64, _grid: &Grid, _show_iter: bool) -> Result<()> {
            self.0.push(frame_index);
            Ok(())
        }
    }

    fn world_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_settings_give_random_unbounded_run() {
        let simulation = Simulation::new(&Settings::default(), &BuiltinPatterns);
        assert_eq!(simulation.origin(), &WorldOrigin::Random);
        assert_eq!(simulation.world().dimensions(), (30, 50));
        assert_eq!(simulation.options().frame_limit, FrameLimit::Unbounded);
        assert!(!simulation.options().show_iter);
        assert_eq!(simulation.options().step_time, Duration::from_millis(300));
    }

    #[test]
    fn test_pattern_with_finite_frames() {
        let mut settings = Settings::default();
        settings.world.pattern = Some(3);
        settings.simulation.step_number = 8;

        let simulation = Simulation::new(&settings, &BuiltinPatterns);
        assert_eq!(simulation.origin(), &WorldOrigin::Pattern(3));
        assert_eq!(simulation.world(), &BuiltinPatterns.pattern(3).unwrap());
        assert_eq!(
            simulation.options().frame_limit,
            FrameLimit::Finite(NonZeroU64::new(8).unwrap())
        );
    }

    #[test]
    fn test_pattern_lookup_failure_falls_back_to_defaults() {
        let mut settings = Settings::default();
        settings.world.pattern = Some(3);
        settings.simulation.step_number = 8;
        settings.simulation.show_iter = true;

        let simulation = Simulation::new(&settings, &NoPatterns);
        assert_eq!(simulation.origin(), &WorldOrigin::Random);
        assert_eq!(simulation.world().dimensions(), (30, 50));
        assert_eq!(simulation.options().frame_limit, FrameLimit::Unbounded);
        assert!(!simulation.options().show_iter);

        settings.world.pattern = Some(99);
        let unknown = Simulation::new(&settings, &BuiltinPatterns);
        assert_eq!(unknown.options().frame_limit, FrameLimit::Unbounded);
    }

    #[test]
    fn test_missing_world_file_falls_back_to_defaults() {
        let mut settings = Settings::default();
        settings.world.file = Some("/no/such/world.txt".into());
        settings.simulation.step_number = 2;

        let simulation = Simulation::new(&settings, &BuiltinPatterns);
        assert_eq!(simulation.origin(), &WorldOrigin::Random);
        assert_eq!(simulation.options().frame_limit, FrameLimit::Unbounded);
    }

    #[test]
    fn test_all_zero_world_is_replaced_by_random() {
        let file = world_file("0000\n0000\n0000\n");
        let mut settings = Settings::default();
        settings.world.file = Some(file.path().to_path_buf());
        settings.simulation.step_number = 5;

        let simulation = Simulation::new(&settings, &BuiltinPatterns);
        assert_eq!(simulation.origin(), &WorldOrigin::RandomFallback);
        assert_eq!(simulation.world().dimensions(), (30, 50));
        assert!(!simulation.world().is_uniform());
        // only the world is replaced; the frame count survives
        assert_eq!(
            simulation.options().frame_limit,
            FrameLimit::Finite(NonZeroU64::new(5).unwrap())
        );
    }

    #[test]
    fn test_fallback_world_has_default_shape() {
        let file = world_file("000\n000\n");
        let mut settings = Settings::default();
        settings.world.file = Some(file.path().to_path_buf());
        settings.world.random_rows = 1;
        settings.world.random_cols = 1;

        let simulation = Simulation::new(&settings, &BuiltinPatterns);
        assert_eq!(simulation.origin(), &WorldOrigin::RandomFallback);
        assert_eq!(simulation.world().dimensions(), (DEFAULT_ROWS, DEFAULT_COLS));
        assert!(!simulation.world().is_uniform());
    }

    #[test]
    fn test_uniform_pattern_is_replaced_by_random() {
        struct EmptyPatterns;

        impl PatternSource for EmptyPatterns {
            fn pattern(&self, _id: u32) -> Result<Grid, PatternError> {
                Ok(Grid::new(4, 4))
            }
        }

        let mut settings = Settings::default();
        settings.world.pattern = Some(2);
        settings.world.random_rows = 3;
        settings.world.random_cols = 3;
        settings.simulation.step_number = 4;

        let simulation = Simulation::new(&settings, &EmptyPatterns);
        assert_eq!(simulation.origin(), &WorldOrigin::RandomFallback);
        assert_eq!(simulation.world().dimensions(), (DEFAULT_ROWS, DEFAULT_COLS));
        assert_eq!(
            simulation.options().frame_limit,
            FrameLimit::Finite(NonZeroU64::new(4).unwrap())
        );
    }

    #[test]
    fn test_out_of_range_world_is_replaced_by_random() {
        let file = world_file("010\n121\n010\n");
        let mut settings = Settings::default();
        settings.world.file = Some(file.path().to_path_buf());

        let simulation = Simulation::new(&settings, &BuiltinPatterns);
        assert_eq!(simulation.origin(), &WorldOrigin::RandomFallback);
    }

    #[test]
    fn test_valid_world_file_is_used() {
        let file = world_file("00000\n00000\n01110\n00000\n00000\n");
        let mut settings = Settings::default();
        settings.world.file = Some(file.path().to_path_buf());

        let simulation = Simulation::new(&settings, &BuiltinPatterns);
        assert_eq!(simulation.origin(), &WorldOrigin::File(file.path().to_path_buf()));
        assert_eq!(simulation.world().population(), 3);
    }

    #[test]
    fn test_run_renders_each_frame_once() {
        let mut settings = Settings::default();
        settings.world.pattern = Some(11);
        settings.simulation.step_number = 6;

        let simulation = Simulation::new(&settings, &BuiltinPatterns);
        let mut renderer = Indices::default();
        let summary = simulation.run(&mut renderer, NoWait, StopHandle::new()).unwrap();

        assert_eq!(renderer.0, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(summary.frames, 6);
        assert_eq!(summary.reason, StopReason::FrameLimitReached);
    }
}
