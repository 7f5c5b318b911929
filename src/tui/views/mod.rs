//! TUI Views module
//!
//! The home and settings tabs, plus the tab bar and status bar.

pub mod home;
pub mod settings;
pub mod status_bar;
pub mod tab_bar;

use ratatui::Frame;

use super::app::{App, Tab};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    match app.active_tab {
        Tab::Home => home::render(frame, app, layout.content),
        Tab::Settings => settings::render(frame, app, layout.content),
    }

    tab_bar::render(frame, app, layout.tab_bar);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        dialogs::add_entry::render(frame, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::MemoryPreferenceStore;
    use crate::theme::{Appearance, FixedSystemTheme, ThemeMode, ThemeStore};
    use crate::models::{Activity, EntryKind, Money};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn app() -> App {
        let theme = ThemeStore::new(MemoryPreferenceStore::new(), Appearance::Light);
        App::new(
            theme,
            Box::new(FixedSystemTheme(Appearance::Light)),
            Settings::default(),
        )
    }

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|frame| render(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_home_shows_settled_balance() {
        let mut app = app();
        app.tick(Duration::from_secs(10));
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Cravox"));
        assert!(screen.contains("$1,800"));
        assert!(screen.contains("Out of $5,000"));
        assert!(screen.contains("-$320"));
        assert!(screen.contains("Netflix Inc."));
        assert!(screen.contains("Add Expense"));
    }

    #[test]
    fn test_settings_tab_lists_sections() {
        let mut app = app();
        app.switch_tab(Tab::Settings);
        app.select_theme(ThemeMode::Dark);
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Settings"));
        assert!(screen.contains("System"));
        assert!(screen.contains("ACCOUNT"));
        assert!(screen.contains("Privacy & Security"));
        assert!(screen.contains("dark"));
    }

    #[test]
    fn test_dialog_is_drawn_over_home() {
        let mut app = app();
        app.home.dialog.open(EntryKind::Income);
        app.tick(Duration::from_millis(300));
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Add Income"));
        assert!(screen.contains("Income Type"));
    }

    #[test]
    fn test_long_spending_list_scrolls() {
        let mut app = app();
        let at = NaiveDate::from_ymd_opt(2024, 12, 12)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid time");
        for i in 0..20 {
            let label = format!("Row {:02}", i);
            app.home
                .activities
                .push(Activity::from_entry(EntryKind::Expense, &label, Money::from_cents(100), at));
        }
        app.home.replay();
        app.tick(Duration::from_secs(10));

        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Netflix Inc."));
        assert!(!screen.contains("Row 19"));

        for _ in 0..app.home.activities.len() {
            app.home.scroll_spending_down();
        }
        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Row 19"));
        assert!(!screen.contains("Netflix Inc."));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        draw(&app, 10, 5);
        app.switch_tab(Tab::Settings);
        draw(&app, 10, 5);
        app.home.dialog.open(EntryKind::Expense);
        draw(&app, 1, 1);
    }
}
