//! Dialog modules for the TUI

pub mod add_entry;
