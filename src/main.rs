//! repoform - Terminal preview of repository settings forms
//!
//! A Ratatui-based TUI that composes the settings form for each
//! repository recipe from its registered facets and renders the result.

mod app;
mod config;
mod forms;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::UiConfig;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repoform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Build the catalog before touching the terminal so registration
    // errors land on a readable stderr
    let catalog = forms::builtin_catalog().context("invalid built-in form declarations")?;
    let config = UiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("failed to load config: {err}");
        UiConfig::default()
    });
    let mut app = App::new(catalog, config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Persist UI preferences picked up during the session
    if let Err(err) = app.config.save() {
        tracing::warn!("failed to save config: {err}");
    }

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key)?,
                Event::Resize(_width, _height) => {
                    // Redrawn with fresh dimensions on the next pass
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
