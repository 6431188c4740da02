//! Settings store with persistence.

use hudbars_core::BarSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::persistence::{load_json, save_json};

// ============================================================================
// Settings Model
// ============================================================================

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Bar layout snapshot handed to the bars on refresh.
    pub bars: BarSettings,

    /// Log level.
    pub log_level: LogLevel,
}

impl Settings {
    /// Checks the settings before they are used or written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` wrapping the bar settings rejection.
    pub fn validate(&self) -> Result<(), StoreError> {
        self.bars.validate()?;
        Ok(())
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Error level logging.
    Error,
    /// Warning level logging.
    #[default]
    Warn,
    /// Info level logging.
    Info,
    /// Debug level logging.
    Debug,
    /// Trace level logging.
    Trace,
}

impl LogLevel {
    /// Directive for an `EnvFilter` scoped to the hudbars crates.
    pub fn filter_directive(self) -> String {
        format!("hudbars={self}")
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

// ============================================================================
// Settings Store
// ============================================================================

/// Settings backed by a JSON file.
#[derive(Debug)]
pub struct SettingsStore {
    settings: RwLock<Settings>,
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store with default settings for `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            settings: RwLock::new(Settings::default()),
            path,
        }
    }

    /// Loads settings from a path, using defaults if the file is missing.
    ///
    /// Settings that parse but fail validation are replaced by defaults with
    /// a warning so a bad hand edit cannot stop the bars from coming up.
    ///
    /// # Errors
    ///
    /// Returns error if an existing settings file cannot be read or parsed.
    pub fn load(path: PathBuf) -> Result<Self, StoreError> {
        let settings = if path.exists() {
            info!(path = %path.display(), "Loading settings");
            let loaded: Settings = load_json(&path)?;
            match loaded.validate() {
                Ok(()) => loaded,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Invalid settings, using defaults");
                    Settings::default()
                }
            }
        } else {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            Settings::default()
        };

        Ok(Self {
            settings: RwLock::new(settings),
            path,
        })
    }

    /// Path the store saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets a copy of the current settings.
    pub fn get(&self) -> Settings {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Gets a copy of the bar settings snapshot.
    pub fn bar_settings(&self) -> BarSettings {
        self.get().bars
    }

    /// Applies `f` to a copy of the settings and keeps the result only if it
    /// validates.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Core` if the edited settings are invalid; the
    /// current settings are left untouched.
    pub fn update<F>(&self, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Settings),
    {
        let mut guard = self
            .settings
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut candidate = guard.clone();
        f(&mut candidate);
        candidate.validate()?;
        *guard = candidate;
        Ok(())
    }

    /// Restores defaults in memory.
    pub fn reset(&self) {
        *self
            .settings
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Settings::default();
        debug!("Settings reset to defaults");
    }

    /// Validates and saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns error if the settings are invalid or cannot be written.
    pub fn save(&self) -> Result<(), StoreError> {
        let settings = self.get();
        settings.validate()?;
        save_json(&self.path, &settings)?;
        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    // ========================================================================
    // Convenience Methods
    // ========================================================================

    /// Sets the total main bar width.
    ///
    /// # Errors
    ///
    /// Returns error if the width is not usable with the current spacing.
    pub fn set_width(&self, width: f32) -> Result<(), StoreError> {
        self.update(|s| s.bars.width = width)
    }

    /// Sets the number of decimals in the percent text.
    ///
    /// # Errors
    ///
    /// Returns error if the precision is out of range.
    pub fn set_text_precision(&self, precision: u8) -> Result<(), StoreError> {
        self.update(|s| s.bars.text_precision = precision)
    }

    /// Gets the log level.
    pub fn log_level(&self) -> LogLevel {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .log_level
    }
}
