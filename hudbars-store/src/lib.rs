// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `HudBars` Store
//!
//! Persisted settings for the status bars.
//!
//! This crate provides:
//!
//! - **Settings**: Bar layout snapshot plus log level
//! - **SettingsStore**: Validated settings with load/save
//! - **Persistence**: File I/O helpers for JSON data
//!
//! ## Usage
//!
//! ```ignore
//! use hudbars_store::{SettingsStore, default_settings_path};
//!
//! let store = SettingsStore::load(default_settings_path())?;
//! store.set_width(640.0)?;
//! store.save()?;
//!
//! bars.refresh(store.bar_settings())?;
//! ```

pub mod error;
pub mod persistence;
pub mod settings_store;

pub use error::StoreError;
pub use persistence::{
    default_config_dir, default_settings_path, ensure_dir, load_json, load_json_or_default,
    save_json,
};
pub use settings_store::{LogLevel, Settings, SettingsStore};
