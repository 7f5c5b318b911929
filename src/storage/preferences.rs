//! Key-value preference stores
//!
//! Small string preferences (currently only the theme) live in a flat JSON
//! object in `preferences.json`. Every store operation returns a
//! `CravoxResult`; callers decide whether a failure matters.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::CravoxError;

use super::file_io::JsonFile;

/// A string key-value store for user preferences
pub trait PreferenceStore: Send {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, CravoxError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), CravoxError>;
}

/// Preferences persisted as a JSON object on disk
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    file: JsonFile,
}

impl JsonPreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    fn load(&self) -> Result<BTreeMap<String, String>, CravoxError> {
        self.file.load()
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, CravoxError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CravoxError> {
        // A corrupt file is replaced rather than blocking every later write
        let mut data = self.load().unwrap_or_default();
        data.insert(key.to_string(), value.to_string());
        self.file.store(&data)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: Vec<(String, String)>,
}

/// In-memory preferences shared between clones
///
/// Clones see the same map, so a test can hand one clone to a
/// [`crate::theme::ThemeStore`] and inspect or sabotage it through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            state.values.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Make every subsequent read fail
    pub fn fail_reads(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_reads = fail;
        }
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_writes = fail;
        }
    }

    /// Current value without going through the failure switches
    pub fn peek(&self, key: &str) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.values.get(key).cloned())
    }

    /// Every successful write in the order it happened
    pub fn write_log(&self) -> Vec<(String, String)> {
        self.state
            .read()
            .map(|state| state.writes.clone())
            .unwrap_or_default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, CravoxError> {
        let state = self.state.read().map_err(|e| {
            CravoxError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        if state.fail_reads {
            return Err(CravoxError::Preference(format!("read of '{}' failed", key)));
        }
        Ok(state.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CravoxError> {
        let mut state = self.state.write().map_err(|e| {
            CravoxError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        if state.fail_writes {
            return Err(CravoxError::Preference(format!("write of '{}' failed", key)));
        }
        state.values.insert(key.to_string(), value.to_string());
        state.writes.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
