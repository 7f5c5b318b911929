//! Path management for Cravox
//!
//! ## Path Resolution Order
//!
//! 1. `CRAVOX_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/cravox` on Linux, `~/Library/Application Support/cravox`
//!    on macOS, `%APPDATA%\cravox\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CravoxError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CRAVOX_DATA_DIR";

/// Manages all paths used by Cravox
#[derive(Debug, Clone)]
pub struct CravoxPaths {
    base_dir: PathBuf,
}

impl CravoxPaths {
    /// Create a new CravoxPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, CravoxError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CravoxPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the key-value preference file
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("preferences.json")
    }

    /// Get the path to the tracing log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("cravox.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CravoxError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CravoxError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, CravoxError> {
    ProjectDirs::from("", "", "cravox")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CravoxError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CravoxPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.preferences_file(),
            temp_dir.path().join("preferences.json")
        );
        assert_eq!(paths.log_file(), temp_dir.path().join("cravox.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("cravox");
        let paths = CravoxPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
