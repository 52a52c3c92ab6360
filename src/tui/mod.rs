//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod terminal;
mod ui;

use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use tracing::{error, info, instrument};

use crate::TuiConfig;

pub use app::{App, Control, Focus};
pub use input::{digit_position, move_cursor};
pub use terminal::TerminalGuard;
pub use ui::{ViewLayout, draw, move_label, status_text};

/// Runs the interactive game until the player quits.
///
/// Logs go to the configured file so they never interfere with the
/// terminal, which is restored even if the event loop fails.
pub fn run_tui(config: TuiConfig) -> Result<()> {
    init_tracing(&config)?;
    info!("Starting tictactoe_replay TUI");

    let mouse = *config.mouse();
    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = TerminalGuard::new(io::stdout(), mouse);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("TUI exited");
    res
}

/// Draws, waits for one input event, applies it, and repeats.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            draw(f, app);
        })?;

        match event::read()? {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if app.handle_key(key) == Control::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            _ => {}
        }
    }
}

fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
