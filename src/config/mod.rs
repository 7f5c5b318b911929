//! Configuration module for Cravox
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CravoxPaths;
pub use settings::Settings;
