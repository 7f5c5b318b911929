//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It owns the [`ThemeStore`]; views borrow the palette from it each frame.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use chrono::Local;
use tracing::{info, warn};

use crate::animation::{BalanceAnimationController, PressFeedback};
use crate::config::Settings;
use crate::models::{seed_activities, Activity, EntryKind, FinancialSnapshot};
use crate::theme::{ColorPalette, SystemThemeSource, ThemeEvent, ThemeMode, ThemeStore};

use super::dialogs::add_entry::AddEntryDialog;

/// Which tab is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Settings => "Settings",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Home => Self::Settings,
            Self::Settings => Self::Home,
        }
    }
}

/// Buttons on the home tab that flash when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeButton {
    Summary,
    ScanReceipt,
    Today,
    AddIncome,
    AddExpense,
}

/// One row of the settings list below the theme switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingItem {
    pub section: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const SETTING_ITEMS: [SettingItem; 9] = [
    SettingItem {
        section: "ACCOUNT",
        title: "Profile",
        subtitle: "Manage your profile information",
    },
    SettingItem {
        section: "ACCOUNT",
        title: "Privacy & Security",
        subtitle: "Control your privacy settings",
    },
    SettingItem {
        section: "ACCOUNT",
        title: "Notifications",
        subtitle: "Manage notification preferences",
    },
    SettingItem {
        section: "APP",
        title: "Language",
        subtitle: "English",
    },
    SettingItem {
        section: "APP",
        title: "Currency",
        subtitle: "USD ($)",
    },
    SettingItem {
        section: "APP",
        title: "Backup & Sync",
        subtitle: "Keep your data safe",
    },
    SettingItem {
        section: "SUPPORT",
        title: "Help & Support",
        subtitle: "Get help when you need it",
    },
    SettingItem {
        section: "SUPPORT",
        title: "Send Feedback",
        subtitle: "Help us improve the app",
    },
    SettingItem {
        section: "SUPPORT",
        title: "About",
        subtitle: "Version 1.0.0",
    },
];

/// State of the home tab
pub struct HomeState {
    pub snapshot: FinancialSnapshot,
    pub animation: BalanceAnimationController,
    pub activities: Vec<Activity>,
    pub dialog: AddEntryDialog,
    pub press: PressFeedback<HomeButton>,
    /// Index of the first spending row shown
    pub spending_scroll: usize,
}

impl HomeState {
    pub fn new(snapshot: FinancialSnapshot) -> Self {
        Self {
            snapshot,
            animation: BalanceAnimationController::new(),
            activities: seed_activities(),
            dialog: AddEntryDialog::new(),
            press: PressFeedback::new(),
            spending_scroll: 0,
        }
    }

    /// Run the card and row entrances from the start, back at the top of the list
    pub fn replay(&mut self) {
        self.spending_scroll = 0;
        self.animation.start(&self.snapshot);
        self.animation.stagger_items(self.activities.len());
    }

    pub fn scroll_spending_down(&mut self) {
        let last = self.activities.len().saturating_sub(1);
        self.spending_scroll = (self.spending_scroll + 1).min(last);
    }

    pub fn scroll_spending_up(&mut self) {
        self.spending_scroll = self.spending_scroll.saturating_sub(1);
    }
}

/// Main application state
pub struct App {
    pub theme: ThemeStore,
    theme_events: Receiver<ThemeEvent>,
    system_source: Box<dyn SystemThemeSource>,
    pub settings: Settings,
    pub should_quit: bool,
    pub active_tab: Tab,
    pub home: HomeState,
    /// 0 is the theme switcher, 1.. index into [`SETTING_ITEMS`]
    pub settings_index: usize,
    pub status_message: Option<String>,
    since_system_poll: Duration,
}

impl App {
    /// Create the app on the home tab with its entrance running
    pub fn new(
        mut theme: ThemeStore,
        system_source: Box<dyn SystemThemeSource>,
        settings: Settings,
    ) -> Self {
        let theme_events = theme.subscribe();
        let snapshot = FinancialSnapshot::new(settings.seed_income, settings.seed_expenses);
        let mut home = HomeState::new(snapshot);
        home.replay();

        Self {
            theme,
            theme_events,
            system_source,
            settings,
            should_quit: false,
            active_tab: Tab::Home,
            home,
            settings_index: 0,
            status_message: None,
            since_system_poll: Duration::ZERO,
        }
    }

    /// Palette for the current effective appearance
    pub fn palette(&self) -> &'static ColorPalette {
        self.theme.palette()
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.home.animation.cancel();
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether a dialog is on screen
    pub fn has_dialog(&self) -> bool {
        self.home.dialog.is_visible()
    }

    /// Switch tabs; leaving Home stops its animations, entering replays them
    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        match tab {
            Tab::Home => self.home.replay(),
            Tab::Settings => {
                self.home.animation.cancel();
                self.home.press.clear();
            }
        }
        self.active_tab = tab;
        self.clear_status();
    }

    /// Flash a home button and report its stub action
    pub fn press(&mut self, button: HomeButton) {
        self.home.press.press(button);
        match button {
            HomeButton::Summary => {
                let snapshot = self.home.snapshot;
                let symbol = self.settings.currency_symbol.clone();
                self.set_status(format!(
                    "Income {} · Expenses {} · Balance {}",
                    snapshot.total_income.format_currency(&symbol),
                    snapshot.total_expenses.format_currency(&symbol),
                    snapshot.balance().format_currency(&symbol),
                ));
            }
            HomeButton::ScanReceipt => self.set_status("Receipt scanning is not available yet"),
            HomeButton::Today => {
                let today = self.home.snapshot.today_spending();
                let symbol = self.settings.currency_symbol.clone();
                self.set_status(format!("Spent today: {}", today.format_currency(&symbol)));
            }
            HomeButton::AddIncome => self.open_entry_dialog(EntryKind::Income),
            HomeButton::AddExpense => self.open_entry_dialog(EntryKind::Expense),
        }
    }

    fn open_entry_dialog(&mut self, kind: EntryKind) {
        if self.home.dialog.open(kind) {
            self.clear_status();
        }
    }

    /// Apply the dialog's entry if it is valid; a no-op otherwise
    pub fn submit_entry(&mut self) -> bool {
        let Some(pending) = self.home.dialog.pending() else {
            return false;
        };
        let mut snapshot = self.home.snapshot;
        if !snapshot.record(pending.kind, pending.amount) {
            warn!(kind = %pending.kind, amount = %pending.amount, "entry rejected, total would overflow");
            self.set_status("Amount too large to add");
            return false;
        }
        let Some(submission) = self.home.dialog.submit() else {
            return false;
        };

        info!(
            kind = %submission.kind,
            category = %submission.category,
            amount = %submission.amount,
            "entry added"
        );

        let home = &mut self.home;
        home.snapshot = snapshot;
        home.activities.insert(
            0,
            Activity::from_entry(
                submission.kind,
                &submission.category,
                submission.amount,
                Local::now().naive_local(),
            ),
        );
        home.replay();

        let amount = submission.amount.format_currency(&self.settings.currency_symbol);
        self.set_status(format!("Added {} {}: {}", submission.kind, submission.category, amount));
        true
    }

    /// Pick a theme mode from the switcher
    pub fn select_theme(&mut self, mode: ThemeMode) {
        self.theme.set_mode(mode);
    }

    pub fn settings_row_count(&self) -> usize {
        SETTING_ITEMS.len() + 1
    }

    pub fn move_up(&mut self) {
        self.settings_index = self.settings_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.settings_index + 1 < self.settings_row_count() {
            self.settings_index += 1;
        }
    }

    /// The settings item under the cursor, `None` on the theme switcher
    pub fn selected_setting(&self) -> Option<&'static SettingItem> {
        self.settings_index
            .checked_sub(1)
            .and_then(|index| SETTING_ITEMS.get(index))
    }

    /// Activate the selected settings row
    pub fn activate_setting(&mut self) {
        match self.selected_setting() {
            Some(item) => self.set_status(format!("{}: coming soon", item.title)),
            None => {
                let next = self.theme.mode().next();
                self.select_theme(next);
            }
        }
    }

    /// Advance every animation by `dt` and apply background results
    pub fn tick(&mut self, dt: Duration) {
        self.theme.pump();
        self.drain_theme_events();

        self.since_system_poll += dt;
        if self.since_system_poll >= self.settings.system_theme_poll() {
            self.since_system_poll = Duration::ZERO;
            self.poll_system_theme();
        }

        if self.active_tab == Tab::Home {
            self.home.animation.advance(dt);
        }
        self.home.dialog.advance(dt);
        self.home.press.advance(dt);
    }

    /// Feed the host appearance to the theme store
    pub fn poll_system_theme(&mut self) {
        let appearance = self.system_source.detect();
        self.theme.set_system_appearance(appearance);
        self.drain_theme_events();
    }

    fn drain_theme_events(&mut self) {
        let mut latest = None;
        while let Ok(event) = self.theme_events.try_recv() {
            latest = Some(event);
        }
        if let Some(event) = latest {
            self.set_status(format!("Theme: {} ({})", event.mode.label(), event.effective));
        }
    }
}
