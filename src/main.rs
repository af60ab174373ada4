use std::error::Error;
use std::fs::File;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{ConfigError, GameConfig};
use grid_snake::game::GameState;
use grid_snake::input::{self, GameInput};
use grid_snake::terminal_runtime::{TerminalSession, restore_terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Grid-based Snake in the terminal")]
struct Cli {
    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Snake length at the start of each session.
    #[arg(long = "initial-length")]
    initial_length: Option<usize>,

    /// Milliseconds between ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG filters, default `info`).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(height) = self.height {
            config.grid.height = height;
        }
        if let Some(initial_length) = self.initial_length {
            config.initial_length = initial_length;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(error) => {
            report_error(&error);
            process::exit(2);
        }
    };

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }
    install_panic_hook();

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };
    info!(?config, seed = ?cli.seed, "starting session");

    run(state)
}

fn run(mut state: GameState) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let tick_interval = Duration::from_millis(state.config().tick_interval_ms);
    let mut last_tick = Instant::now();

    loop {
        session.draw(&state)?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if let Some(game_input) = input::poll_input(timeout)? {
            if game_input == GameInput::Quit {
                break;
            }

            state.apply_input(game_input);
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }

    info!(score = state.score(), "quit requested");
    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        default_hook(panic_info);
    }));
}

fn report_error(error: &dyn Error) {
    eprintln!("grid-snake: {error}");

    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
