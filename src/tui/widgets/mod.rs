//! Reusable widgets for the TUI

pub mod input;
pub mod pie;

pub use input::TextInput;
pub use pie::PieChart;
