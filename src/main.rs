//! Main CLI application for the Game of Life player

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use game_of_life_player::{
    config::{CliOverrides, ColorMode, RendererKind, Settings},
    game_of_life::{create_example_worlds, save_grid_to_file, BuiltinPatterns, PatternSource, StepEngine, MOORE},
    utils::{ColorOutput, GridFormatter},
    StopHandle,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation (the default when no subcommand is given)
    Play(PlayArgs),

    /// List the built-in starting patterns
    Patterns {
        /// Print the world of one pattern
        #[arg(short, long)]
        show: Option<u32>,

        /// Advance the shown pattern this many generations first
        #[arg(short, long, default_value_t = 0, requires = "show")]
        generation: usize,

        /// Write the shown pattern to a world file
        #[arg(long, requires = "show")]
        save: Option<PathBuf>,
    },

    /// Create example configuration and world files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct PlayArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Built-in pattern id (see `life patterns`)
    #[arg(short, long)]
    pattern: Option<u32>,

    /// World file of '0'/'1' rows
    #[arg(short, long, conflicts_with = "pattern")]
    world: Option<PathBuf>,

    /// Number of frames; zero or negative runs until interrupted
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    steps: Option<i64>,

    /// Milliseconds between frames
    #[arg(short = 't', long, allow_negative_numbers = true)]
    step_time: Option<i64>,

    /// Show the iteration counter above each frame
    #[arg(short = 'i', long)]
    show_iter: bool,

    /// Don't draw frames, only log statistics
    #[arg(long)]
    headless: bool,

    /// When to use colors
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => play_command(cli.play),
        Some(Commands::Play(args)) => play_command(args),
        Some(Commands::Patterns { show, generation, save }) => patterns_command(show, generation, save),
        Some(Commands::Setup { directory, force }) => setup_command(directory, force),
    }
}

fn init_logging(verbose: bool, headless: bool) {
    // frames own stdout; keep stderr quiet unless asked
    let default = match (verbose, headless) {
        (true, _) => "debug",
        (false, true) => "info",
        (false, false) => "warn",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        log::debug!("config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn build_settings(args: &PlayArgs) -> Result<Settings> {
    let mut settings = load_settings(&args.config)?;

    let cli_overrides = CliOverrides {
        pattern: args.pattern,
        world_file: args.world.clone(),
        step_number: args.steps,
        step_time: args.step_time,
        show_iter: args.show_iter,
        headless: args.headless,
        color: args.color.map(ColorMode::from),
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn play_command(args: PlayArgs) -> Result<()> {
    init_logging(args.verbose, args.headless);
    let settings = build_settings(&args)?;

    if args.verbose {
        log::debug!("settings: {:?}", settings);
    }

    let summary = game_of_life_player::play(&settings, StopHandle::new())?;

    if settings.display.renderer == RendererKind::Headless {
        println!(
            "{}",
            ColorOutput::success(&format!("Finished after {} frames", summary.frames))
        );
    }

    Ok(())
}

fn patterns_command(show: Option<u32>, generation: usize, save: Option<PathBuf>) -> Result<()> {
    let library = BuiltinPatterns;

    if let Some(id) = show {
        let start = library
            .pattern(id)
            .with_context(|| format!("Cannot show pattern {}", id))?;
        let grid = StepEngine::evolve_generations(start, &MOORE, generation);

        if let Some(path) = save {
            save_grid_to_file(&grid, &path)?;
            println!("Saved pattern {} (generation {}) to {}", id, generation, path.display());
        } else {
            println!("{}", GridFormatter::format_grid_with_coords(&grid));
        }
        return Ok(());
    }

    let mut entries = Vec::new();
    for info in BuiltinPatterns::catalog() {
        let grid = library.pattern(info.id)?;
        entries.push((*info, grid));
    }
    println!("{}", GridFormatter::format_pattern_listing(&entries));
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let worlds_dir = directory.join("worlds");

    for dir in [&config_dir, &worlds_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_worlds(&worlds_dir).context("Failed to create example worlds")?;
    println!("Created example worlds in: {}", worlds_dir.display());

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // Preset oscillator with a visible counter
    let mut pulsar = Settings::default();
    pulsar.world.pattern = Some(11);
    pulsar.simulation.step_number = 30;
    pulsar.simulation.show_iter = true;
    pulsar.to_file(examples_dir.join("pulsar.yaml"))?;

    // World file, faster cadence
    let mut glider = Settings::default();
    glider.world.file = Some(PathBuf::from("worlds/glider.txt"));
    glider.simulation.step_time = 120;
    glider.to_file(examples_dir.join("glider.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own worlds to {}", worlds_dir.display());
    println!("3. Run: life play --config config/examples/pulsar.yaml");

    Ok(())
}
