use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, Level};

use countdown_fireworks::audio::Cues;
use countdown_fireworks::clock::{Clock, SystemClock};
use countdown_fireworks::color::{parse_hex_color, Rgb, BACKGROUND};
use countdown_fireworks::frame::{FrameLimiter, TARGET_FPS};
use countdown_fireworks::input::{InputSource, TerminalInput};
use countdown_fireworks::render::{draw_scene, world_size, Presenter, TerminalRenderer};
use countdown_fireworks::sim::Scene;
use countdown_fireworks::{Result, ShowError};

/// New Year countdown with fireworks, confetti and a glowing title.
///
/// Press 'q', ESC, or Ctrl+C to exit.
#[derive(Debug, Parser)]
#[command(name = "countdown", version)]
struct Cli {
    /// Background color as hex (e.g. 1a1b26)
    #[arg(long, value_name = "RRGGBB", value_parser = parse_bg)]
    bg_color: Option<Rgb>,

    /// Seed the random source for a repeatable show
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is busy drawing)
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Log verbosity when --log is given
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn parse_bg(hex: &str) -> std::result::Result<Rgb, ShowError> {
    parse_hex_color(hex).ok_or_else(|| ShowError::InvalidColor(hex.to_string()))
}

fn init_logging(path: &Path, level: Level) -> Result<()> {
    let file = File::create(path).map_err(|source| ShowError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Puts the terminal back however the loop ends.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn run(cli: &Cli) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let out = BufWriter::with_capacity(1024 * 64, stdout());

    let (cols, rows) = terminal::size()?;
    let (cols, rows) = (cols as usize, rows as usize);
    let (width, height) = world_size(cols, rows);

    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    info!(cols, rows, width, height, seed = ?cli.seed, "starting show");

    let clock = SystemClock::new();
    let mut scene = Scene::new(width, height, clock.now_secs());
    let mut renderer = TerminalRenderer::new(out, cols, rows);
    let presenter = Presenter {
        background: cli.bg_color.unwrap_or(BACKGROUND),
    };
    let mut input = TerminalInput;
    let mut cues = Cues::silent();
    let mut limiter = FrameLimiter::new(TARGET_FPS);

    loop {
        let pressed = input.poll()?;

        let report = scene.tick(clock.now_secs(), &mut rng);
        cues.dispatch(&report);
        draw_scene(&presenter, &scene, &mut renderer, &mut rng)?;

        if pressed.exit_requested() {
            break;
        }
        limiter.wait();
    }

    info!(ticks = scene.ticks(), "show stopped");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log {
        init_logging(path, cli.log_level)?;
    }
    run(&cli)
}
