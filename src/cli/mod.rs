//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the theme store and models.

pub mod summary;
pub mod theme;

pub use summary::handle_summary_command;
pub use theme::{handle_theme_command, ThemeCommands};
