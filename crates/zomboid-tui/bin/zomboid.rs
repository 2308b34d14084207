//! Zomboid: grid survival in the terminal
//!
//! Main entry point for the game.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use zomboid_core::{GameConfig, GameState};
use zomboid_tui::{App, Theme};

/// Environment variable holding the log filter
const LOG_ENV: &str = "ZOMBOID_LOG";

/// Zomboid - survive the outbreak
#[derive(Parser, Debug)]
#[command(name = "zomboid")]
#[command(author, version, about = "Zomboid - survive the outbreak", long_about = None)]
struct Args {
    /// Config file (JSON); defaults to <config dir>/zomboid/config.json
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// RNG seed for a reproducible world
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Milliseconds between world ticks
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Use colors for a light terminal background
    #[arg(long = "light")]
    light: bool,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut config = GameConfig::load(args.config.as_deref()).context("failed to load config")?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(tick_ms) = args.tick_ms {
        config.tick_ms = tick_ms;
    }
    config.validate().context("invalid settings")?;

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };
    let app = App::new(GameState::from_config(config), theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Draw, handle input and tick the world on a fixed interval until quit
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(app.state().config.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let event = event::read()?;
            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }
            if app.should_quit() {
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    tracing::info!("quit");
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
