//! Tracing setup
//!
//! The TUI owns stdout, so log output goes to `cravox.log` in the base
//! directory. `RUST_LOG` wins over the filter in the settings file.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{CravoxPaths, Settings};
use crate::error::CravoxError;

static TRACING_INIT: Once = Once::new();

/// Build the filter from `RUST_LOG`, falling back to `fallback`
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("cravox=info"))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(paths: &CravoxPaths, settings: &Settings) -> Result<(), CravoxError> {
    let mut result = Ok(());

    TRACING_INIT.call_once(|| {
        result = paths.ensure_directories().and_then(|_| {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(paths.log_file())
                .map_err(|e| CravoxError::Config(format!("Failed to open log file: {}", e)))?;

            fmt()
                .with_env_filter(build_filter(&settings.log_filter))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| CravoxError::Config(format!("Failed to install logger: {}", e)))
        });
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fallback_filter_still_builds() {
        // An unparsable directive falls back to the default filter
        let filter = build_filter("cravox=[");
        assert!(!filter.to_string().is_empty());
    }
}
