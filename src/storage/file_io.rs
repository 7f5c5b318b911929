//! JSON documents on disk
//!
//! [`JsonFile`] reads a missing document as its default value and replaces
//! documents through a sibling temp file, so a crash mid-write leaves the
//! previous contents in place.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CravoxError;

/// A single JSON document at a fixed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a pending write is staged before the rename
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Decode the document; a missing file yields `T::default()`
    pub fn load<T>(&self) -> Result<T, CravoxError>
    where
        T: DeserializeOwned + Default,
    {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(self.failure("open", e)),
        };

        serde_json::from_reader(BufReader::new(file)).map_err(|e| self.failure("parse", e))
    }

    /// Replace the document with `data`
    pub fn store<T>(&self, data: &T) -> Result<(), CravoxError>
    where
        T: Serialize,
    {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.failure("create the directory for", e))?;
        }

        let staging = self.staging_path();
        let result = write_synced(&staging, data).and_then(|_| {
            fs::rename(&staging, &self.path).map_err(|e| self.failure("replace", e))
        });
        if result.is_err() {
            let _ = fs::remove_file(&staging);
        }
        result
    }

    fn failure(&self, action: &str, err: impl std::fmt::Display) -> CravoxError {
        CravoxError::Storage(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}

fn write_synced<T: Serialize>(path: &Path, data: &T) -> Result<(), CravoxError> {
    let file = File::create(path).map_err(|e| staging_error(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| staging_error(path, e))?;
    writer.flush().map_err(|e| staging_error(path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| staging_error(path, e))
}

fn staging_error(path: &Path, err: impl std::fmt::Display) -> CravoxError {
    CravoxError::Storage(format!("Failed to stage {}: {}", path.display(), err))
}
