//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog, the global keys, or the
//! active tab.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, HomeButton, Tab};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    // An open dialog swallows every other key
    if app.has_dialog() {
        super::dialogs::add_entry::handle_key(app, key);
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.switch_tab(Tab::Home);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_tab(Tab::Settings);
            return Ok(());
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.switch_tab(app.active_tab.other());
            return Ok(());
        }
        _ => {}
    }

    match app.active_tab {
        Tab::Home => handle_home_key(app, key),
        Tab::Settings => handle_settings_key(app, key),
    }
    Ok(())
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    let button = match key.code {
        KeyCode::Char('i') => HomeButton::AddIncome,
        KeyCode::Char('e') => HomeButton::AddExpense,
        KeyCode::Char('s') => HomeButton::Summary,
        KeyCode::Char('r') => HomeButton::ScanReceipt,
        KeyCode::Char('t') => HomeButton::Today,
        KeyCode::Char('j') | KeyCode::Down => {
            app.home.scroll_spending_down();
            return;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.home.scroll_spending_up();
            return;
        }
        KeyCode::Esc => {
            app.clear_status();
            return;
        }
        _ => return,
    };
    app.press(button);
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('h') | KeyCode::Left if app.selected_setting().is_none() => {
            let mode = app.theme.mode().prev();
            app.select_theme(mode);
        }
        KeyCode::Char('l') | KeyCode::Right if app.selected_setting().is_none() => {
            let mode = app.theme.mode().next();
            app.select_theme(mode);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_setting(),
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}
