//! Cubic tic-tac-toe in the terminal
//!
//! Local two-player play with keyboard and mouse, plus a dump of the
//! winning-line catalog.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use cubic_tictactoe::{GridSize, generate_lines};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::{
    io::{self, Stdout},
    path::PathBuf,
    time::Duration,
};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::{Cli, Command};
use config::TuiConfig;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { size, config } => run_play(size, config),
        Command::Lines { size } => run_lines(size),
    }
}

/// Print the line catalog for `size` as pretty JSON
fn run_lines(size: GridSize) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let lines = generate_lines(size);
    info!(%size, count = lines.len(), "Printing line catalog");
    println!("{}", serde_json::to_string_pretty(&lines)?);
    Ok(())
}

/// Run an interactive game
#[instrument(skip_all)]
fn run_play(size: Option<GridSize>, config: Option<PathBuf>) -> Result<()> {
    let mut config = TuiConfig::load(config.as_deref())?;
    if let Some(size) = size {
        config = config.with_size(size);
    }

    // Log to a file so output does not interfere with the terminal
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())
        .with_context(|| format!("Failed to open log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(size = %config.size(), "Starting cubic tic-tac-toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.size());
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "Game loop failed");
    }
    info!("Exiting");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let size = terminal.size()?;
        let geometry = ui::board_geometry(Rect::new(0, 0, size.width, size.height), app);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = input::action_for(key.code) {
                    app.handle_action(action);
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved => app.pointer_moved(&geometry, &(mouse.column, mouse.row)),
                MouseEventKind::Down(MouseButton::Left) => {
                    app.clicked(&geometry, &(mouse.column, mouse.row))
                }
                _ => {}
            },
            _ => {}
        }

        app.process_events();
    }
}
