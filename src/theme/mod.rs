//! Theme resolution and persistence
//!
//! - [`ThemeMode`] is what the user picks, [`Appearance`] is what gets drawn
//! - [`ThemeStore`] combines the two with the host signal and persists the pick
//! - [`ColorPalette`] holds the two fixed palettes

pub mod mode;
pub mod palette;
pub mod store;
pub mod system;

pub use mode::{Appearance, ThemeMode};
pub use palette::{blend, ColorPalette, DARK, LIGHT, ON_ACCENT};
pub use store::{ThemeEvent, ThemeStore, THEME_KEY};
pub use system::{EnvSystemTheme, FixedSystemTheme, SystemThemeSource};
