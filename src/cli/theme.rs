//! Theme CLI commands
//!
//! Reads and writes the persisted theme choice through the same
//! [`ThemeStore`] the TUI uses.

use clap::Subcommand;

use crate::config::paths::CravoxPaths;
use crate::display::theme::{format_palette, format_theme_status};
use crate::error::{CravoxError, CravoxResult};
use crate::storage::{JsonPreferenceStore, PreferenceStore};
use crate::theme::{EnvSystemTheme, SystemThemeSource, ThemeMode, ThemeStore, THEME_KEY};

/// Theme subcommands
#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the chosen theme and what it resolves to
    Show {
        /// Also print the colours of the effective palette
        #[arg(short, long)]
        palette: bool,
    },
    /// Choose a theme
    Set {
        /// light, dark or system
        mode: String,
    },
}

/// Handle a theme command
pub fn handle_theme_command(paths: &CravoxPaths, cmd: ThemeCommands) -> CravoxResult<()> {
    match cmd {
        ThemeCommands::Show { palette } => {
            let store = load_store(paths);
            print!("{}", format_theme_status(store.mode(), store.system_appearance()));
            if palette {
                println!();
                println!("{}", format_palette(store.palette()));
            }
        }
        ThemeCommands::Set { mode } => {
            let mode: ThemeMode = mode.parse()?;
            paths.ensure_directories()?;

            let mut store = load_store(paths);
            store.set_mode(mode);
            store.wait_idle();

            // The store only logs write failures, so confirm against the file
            let persisted = JsonPreferenceStore::new(paths.preferences_file()).get(THEME_KEY)?;
            if persisted.as_deref() != Some(mode.as_str()) {
                return Err(CravoxError::Preference(format!(
                    "Failed to save theme to {}",
                    paths.preferences_file().display()
                )));
            }

            println!("Theme set to {} (showing {})", mode, store.effective());
        }
    }

    Ok(())
}

/// A store over the preferences file with its stored choice applied
fn load_store(paths: &CravoxPaths) -> ThemeStore {
    let preferences = JsonPreferenceStore::new(paths.preferences_file());
    let mut store = ThemeStore::new(preferences, EnvSystemTheme.detect());
    store.initialize();
    store.wait_idle();
    store
}
