//! Terminal User Interface module
//!
//! A ratatui front end with a Home tab (balance card, chart, spending list,
//! add-entry sheet) and a Settings tab (theme switcher and setting rows).

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
