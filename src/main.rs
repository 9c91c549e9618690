//! Command line front end for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use conway_life::{
    config::{CliOverrides, Settings, TopologyMode},
    driver::{ConsoleFrontend, ModeRequest, Preset, Session},
    game_of_life::{classify, create_example_boards, load_board_from_file, tick_n},
    utils::{BoardFormatter, ColorOutput},
    verify::{discover_fixtures, verify_fixtures},
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "conway_life")]
#[command(about = "Conway's Game of Life on a finite board")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TopologyArg {
    Bounded,
    Wrapped,
}

impl From<TopologyArg> for TopologyMode {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Bounded => TopologyMode::Bounded,
            TopologyArg::Wrapped => TopologyMode::Wrapped,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Tick,
    Animate,
    Quit,
}

impl From<ModeArg> for ModeRequest {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Tick => ModeRequest::Tick,
            ModeArg::Animate => ModeRequest::Animate,
            ModeArg::Quit => ModeRequest::Quit,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive session; flags skip the matching prompts
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board file (overrides config, otherwise prompted for)
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// Edge handling (otherwise prompted for)
        #[arg(short, long, value_enum)]
        topology: Option<TopologyArg>,

        /// What to do with the board (otherwise prompted for)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Frames to animate (overrides config)
        #[arg(short, long)]
        frames: Option<usize>,

        /// Delay between animation frames in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Keep previous frames on screen while animating
        #[arg(long)]
        no_clear: bool,
    },

    /// Advance a board and print the result
    Tick {
        /// Board file
        #[arg(short, long)]
        board: PathBuf,

        #[arg(short, long, value_enum, default_value = "bounded")]
        topology: TopologyArg,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Print the starting board next to the result
        #[arg(long)]
        side_by_side: bool,
    },

    /// Report statistics and long-run behavior of a board
    Analyze {
        /// Board file
        #[arg(short, long)]
        board: PathBuf,

        #[arg(short, long, value_enum, default_value = "bounded")]
        topology: TopologyArg,

        /// Give up looking for a repeat after this many generations
        #[arg(long, default_value_t = 1000)]
        max_generations: usize,
    },

    /// Check boards against their expected next generations
    Check {
        /// Directory of starting boards
        #[arg(long, default_value = "boards")]
        boards: PathBuf,

        /// Directory of `<name>-after1.txt` / `<name>-after1-wrap.txt` boards
        #[arg(long, default_value = "boards-after-one-iteration")]
        expected: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a default configuration and example boards
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Run {
            config,
            board,
            topology,
            mode,
            frames,
            delay_ms,
            no_clear,
        } => {
            let overrides = CliOverrides {
                topology: topology.map(TopologyMode::from),
                frames,
                frame_delay_ms: delay_ms,
                board_file: board,
            };
            run_command(config, overrides, mode, no_clear)
        }
        Commands::Tick {
            board,
            topology,
            generations,
            side_by_side,
        } => tick_command(board, topology.into(), generations, side_by_side),
        Commands::Analyze {
            board,
            topology,
            max_generations,
        } => analyze_command(board, topology.into(), max_generations),
        Commands::Check {
            boards,
            expected,
            json,
        } => check_command(boards, expected, json),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    mode: Option<ModeArg>,
    no_clear: bool,
) -> Result<()> {
    let config_found = config_path.exists();
    let mut settings = if config_found {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        log::info!("config file {} not found, using defaults", config_path.display());
        Settings::default()
    };
    settings.merge_with_cli(&overrides);

    let preset = build_preset(&settings, &overrides, mode, config_found);
    let mut console = ConsoleFrontend::stdio();

    settings.input.board_file = preset.resolve_board_file(&mut console)?;
    settings.validate().context("Configuration validation failed")?;

    let board = load_board_from_file(&settings.input.board_file)?;
    let topology = preset.resolve_topology(&mut console)?;
    let mode = preset.resolve_mode(&mut console)?;

    Session::new(board, topology)
        .with_frame_delay(Duration::from_millis(settings.simulation.frame_delay_ms))
        .with_clear_between_frames(settings.display.clear_between_frames && !no_clear)
        .run(&mut console, mode)?;

    Ok(())
}

/// Settings from a config file stand in for the board and frame prompts;
/// the topology is only skipped when given on the command line
fn build_preset(
    settings: &Settings,
    overrides: &CliOverrides,
    mode: Option<ModeArg>,
    config_found: bool,
) -> Preset {
    let from_settings = overrides.board_file.is_some() || config_found;
    let frames_known = overrides.frames.is_some() || config_found;

    Preset {
        board_file: from_settings.then(|| settings.input.board_file.clone()),
        topology: overrides.topology,
        mode: mode.map(ModeRequest::from),
        frames: frames_known.then_some(settings.simulation.frames),
    }
}

fn tick_command(
    board_path: PathBuf,
    topology: TopologyMode,
    generations: usize,
    side_by_side: bool,
) -> Result<()> {
    let start = load_board_from_file(&board_path)?;

    let board = tick_n(start.clone(), topology, generations);

    if side_by_side {
        print!("{}", BoardFormatter::format_side_by_side(&start, &board));
    } else {
        print!("{}", BoardFormatter::format_plain(&board));
    }

    Ok(())
}

fn analyze_command(
    board_path: PathBuf,
    topology: TopologyMode,
    max_generations: usize,
) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing board..."));

    let board = load_board_from_file(&board_path)?;

    println!("Board ({}x{}, {}):", board.rows(), board.cols(), topology);
    println!("{}", BoardFormatter::format_with_coords(&board));

    let density = if board.cell_count() == 0 {
        0.0
    } else {
        board.living_count() as f64 / board.cell_count() as f64 * 100.0
    };
    println!("Board Statistics:");
    println!("  Living cells: {}", board.living_count());
    println!("  Density: {:.1}%", density);

    let evolution = classify(&board, topology, max_generations);
    println!("  Evolution: {}", ColorOutput::success(&evolution.to_string()));

    Ok(())
}

fn check_command(boards_dir: PathBuf, expected_dir: PathBuf, json: bool) -> Result<()> {
    let cases = discover_fixtures(&boards_dir, &expected_dir)?;
    let report = verify_fixtures(&cases);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        print!("{}", report);
    }

    if report.all_passed() {
        println!("{}", ColorOutput::success("All fixtures passed"));
        Ok(())
    } else {
        let summary = format!("{} of {} fixtures failed", report.failed, report.total);
        println!("{}", ColorOutput::error(&summary));
        anyhow::bail!(summary)
    }
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let boards_dir = directory.join("boards");

    for dir in [&config_dir, &boards_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut settings = Settings::default();
        settings.input.board_file = PathBuf::from("boards/blinker.txt");
        settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!("Skipped: {} (already exists)", config_path.display()))
        );
    }

    create_example_boards(&boards_dir).context("Failed to create example boards")?;
    println!("Created example boards in: {}", boards_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: conway_life run --config {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "conway_life",
            "run",
            "--board",
            "boards/simple.txt",
            "--topology",
            "wrapped",
            "--mode",
            "animate",
            "--frames",
            "5",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["conway_life", "tick", "--topology", "sideways", "-b", "x"]);
        assert!(cli.is_err());
    }

    fn overrides() -> CliOverrides {
        CliOverrides::default()
    }

    #[test]
    fn test_preset_without_config_prompts_for_board_and_frames() {
        let settings = Settings::default();
        let preset = build_preset(&settings, &overrides(), Some(ModeArg::Animate), false);

        assert!(preset.board_file.is_none());
        assert!(preset.topology.is_none());
        assert_eq!(preset.mode, Some(ModeRequest::Animate));
        assert!(preset.frames.is_none());
    }

    #[test]
    fn test_preset_with_config_uses_its_board_and_frames() {
        let mut settings = Settings::default();
        settings.input.board_file = PathBuf::from("boards/glider.txt");
        settings.simulation.frames = 25;

        let preset = build_preset(&settings, &overrides(), None, true);
        assert_eq!(preset.board_file, Some(PathBuf::from("boards/glider.txt")));
        assert_eq!(preset.frames, Some(25));
        assert!(preset.topology.is_none());
        assert!(preset.mode.is_none());
    }

    #[test]
    fn test_preset_from_command_line_flags() {
        let mut settings = Settings::default();
        let cli_overrides = CliOverrides {
            topology: Some(TopologyMode::Wrapped),
            frames: Some(3),
            frame_delay_ms: None,
            board_file: Some(PathBuf::from("boards/block.txt")),
        };
        settings.merge_with_cli(&cli_overrides);

        let preset = build_preset(&settings, &cli_overrides, Some(ModeArg::Tick), false);
        assert_eq!(preset.board_file, Some(PathBuf::from("boards/block.txt")));
        assert_eq!(preset.topology, Some(TopologyMode::Wrapped));
        assert_eq!(preset.mode, Some(ModeRequest::Tick));
        assert_eq!(preset.frames, Some(3));
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let config_path = temp_dir.path().join("config/default.yaml");
        assert!(config_path.exists());
        assert!(temp_dir.path().join("boards/glider.txt").exists());

        let settings = Settings::from_file(&config_path).unwrap();
        assert_eq!(settings.input.board_file, PathBuf::from("boards/blinker.txt"));
    }

    #[test]
    fn test_check_command_on_shipped_fixtures() {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        check_command(root.join("boards"), root.join("boards-after-one-iteration"), false)
            .unwrap();
    }

    #[test]
    fn test_check_command_fails_on_wrong_expectation() {
        let temp_dir = tempdir().unwrap();
        let boards = temp_dir.path().join("boards");
        let expected = temp_dir.path().join("expected");
        std::fs::create_dir_all(&boards).unwrap();
        std::fs::create_dir_all(&expected).unwrap();

        std::fs::write(boards.join("lonely.txt"), "3\n3\n---\n-X-\n---\n").unwrap();
        std::fs::write(expected.join("lonely-after1.txt"), "3\n3\n---\n-X-\n---\n").unwrap();

        let err = check_command(boards, expected, true).unwrap_err();
        assert!(err.to_string().contains("1 of 1 fixtures failed"));
    }
}
