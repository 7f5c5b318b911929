//! User settings for Cravox
//!
//! Manages the dashboard seed figures, currency symbol, UI timing and the
//! default log filter. The theme choice is not stored here; it lives in the
//! key-value preference store so it can be written in the background.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::CravoxPaths;
use crate::error::CravoxError;
use crate::models::Money;
use crate::storage::JsonFile;

/// User settings for Cravox
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Income total the home screen starts with (stored in cents)
    #[serde(default = "default_seed_income")]
    pub seed_income: Money,

    /// Expense total the home screen starts with (stored in cents)
    #[serde(default = "default_seed_expenses")]
    pub seed_expenses: Money,

    /// Milliseconds between UI ticks
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Seconds between system theme polls
    #[serde(default = "default_system_theme_poll_secs")]
    pub system_theme_poll_secs: u64,

    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_seed_income() -> Money {
    Money::from_dollars_cents(5000, 0)
}

fn default_seed_expenses() -> Money {
    Money::from_dollars_cents(3200, 0)
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_system_theme_poll_secs() -> u64 {
    5
}

fn default_log_filter() -> String {
    "cravox=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            seed_income: default_seed_income(),
            seed_expenses: default_seed_expenses(),
            tick_rate_ms: default_tick_rate_ms(),
            system_theme_poll_secs: default_system_theme_poll_secs(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Defaults are not written back; call [`Settings::save`] to persist.
    pub fn load_or_create(paths: &CravoxPaths) -> Result<Self, CravoxError> {
        let settings: Settings = Self::file(paths)
            .load()
            .map_err(|e| CravoxError::Config(format!("Failed to load settings: {}", e)))?;
        Ok(settings.with_non_negative_seeds())
    }

    /// Snapshot totals are never negative; a hand-edited negative seed becomes zero
    fn with_non_negative_seeds(mut self) -> Self {
        for (name, seed) in [
            ("seed_income", &mut self.seed_income),
            ("seed_expenses", &mut self.seed_expenses),
        ] {
            if seed.is_negative() {
                warn!(field = name, value = %seed, "negative seed in settings, using zero");
                *seed = Money::zero();
            }
        }
        self
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CravoxPaths) -> Result<(), CravoxError> {
        paths.ensure_directories()?;
        Self::file(paths)
            .store(self)
            .map_err(|e| CravoxError::Config(format!("Failed to save settings: {}", e)))
    }

    fn file(paths: &CravoxPaths) -> JsonFile {
        JsonFile::new(paths.settings_file())
    }

    /// Tick interval as a Duration, never shorter than 10ms
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// System theme poll interval as a Duration
    pub fn system_theme_poll(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.system_theme_poll_secs.max(1))
    }
}
