//! Storage layer for Cravox
//!
//! Only preferences are persisted. Financial figures live in memory for the
//! length of a session.

pub mod file_io;
pub mod preferences;

pub use file_io::JsonFile;
pub use preferences::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};
