mod app;
mod config;
mod domain;
mod input;
mod logging;
mod notifications;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{config_file, init_config, load_config, log_file};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "focusup")]
#[command(about = "A terminal focus companion: pomodoro timer, tasks, blocker, mood diary and calendar", long_about = None)]
struct Cli {
    /// Path to config.json. Defaults to ~/.focusup/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// Print the config path and the effective config
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config_file()?,
    };

    match cli.command {
        Some(Commands::Init) => {
            init_config(&config_path)?;
            println!("Wrote default config: {}", config_path.display());
            Ok(())
        }
        Some(Commands::Config) => {
            let config = load_config(&config_path)?;
            println!("{}", config_path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        None => run_tui(config_path),
    }
}

fn run_tui(config_path: PathBuf) -> Result<()> {
    let config = load_config(&config_path)?;
    logging::init(&log_file()?)?;
    info!(config = %config_path.display(), "focusup starting");

    let mut app = AppState::new(config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Session state is in-memory only; leave a trace of it in the log
    let snapshot = app.session.snapshot();
    info!(
        points = snapshot.points,
        trees = snapshot.trees,
        tasks = snapshot.tasks.len(),
        "focusup exiting"
    );
    if let Ok(json) = serde_json::to_string(&snapshot) {
        debug!(snapshot = %json, "final session state");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::poll_duration(app.config.poll_interval_ms);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wake up for the next second even when no key arrives
        let timeout = app
            .ticker
            .until_next(Instant::now())
            .map_or(poll_rate, |next| next.min(poll_rate));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
