//! Display formatting for terminal output
//!
//! Formats snapshots, the spending list and theme details for the
//! non-interactive commands.

pub mod summary;
pub mod theme;

pub use summary::{format_activity_table, format_snapshot};
pub use theme::{format_palette, format_theme_status};
