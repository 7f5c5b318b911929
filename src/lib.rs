//! Cravox - terminal personal-finance dashboard
//!
//! A balance card that animates towards the current income/expense
//! snapshot, a quick way to add income and expenses, and a light/dark/system
//! theme that survives restarts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, the financial snapshot and spending rows
//! - `storage`: JSON files and the key-value preference stores
//! - `theme`: Theme modes, palettes and the persisted theme store
//! - `animation`: Tweens, staged sequences and the balance entrance
//! - `logging`: Tracing setup
//! - `cli` / `display`: Non-interactive commands and their formatting
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use cravox::config::{paths::CravoxPaths, settings::Settings};
//!
//! let paths = CravoxPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod animation;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod storage;
pub mod theme;
pub mod tui;

pub use error::{CravoxError, CravoxResult};
