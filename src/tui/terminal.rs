//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Instant;

use tracing::info;

use crate::config::{CravoxPaths, Settings};
use crate::storage::JsonPreferenceStore;
use crate::theme::{EnvSystemTheme, SystemThemeSource, ThemeStore};

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before the panic message is printed
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(paths: &CravoxPaths, settings: &Settings) -> Result<()> {
    let source = EnvSystemTheme;
    let mut theme = ThemeStore::new(
        JsonPreferenceStore::new(paths.preferences_file()),
        source.detect(),
    );
    theme.initialize();

    let mut app = App::new(theme, Box::new(source), settings.clone());
    let mut terminal = init_terminal()?;
    let events = EventHandler::new(settings.tick_rate());
    info!("tui started");

    let result = event_loop(&mut terminal, &mut app, &events);

    // Let queued theme writes land before the process exits
    app.theme.wait_idle();
    restore_terminal()?;
    info!("tui stopped");

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        match events.next()? {
            Event::Key(key) => handle_event(app, Event::Key(key))?,
            Event::Resize(_, _) => {
                // Terminal will redraw automatically
            }
            Event::Tick => {
                let now = Instant::now();
                app.tick(now.duration_since(last_tick));
                last_tick = now;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
