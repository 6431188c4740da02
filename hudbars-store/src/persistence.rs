//! File persistence helpers.
//!
//! Handles loading and saving JSON to disk with owner-only permissions.

use serde::{Serialize, de::DeserializeOwned};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::StoreError;

// ============================================================================
// Default Paths
// ============================================================================

/// Returns the default configuration directory.
///
/// - macOS: `~/Library/Application Support/HudBars`
/// - Linux: `~/.config/hudbars`
/// - Windows: `%APPDATA%\hudbars`
pub fn default_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support").join("HudBars"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::config_dir()
            .map(|c| c.join("hudbars"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Returns the default settings file path.
pub fn default_settings_path() -> PathBuf {
    default_config_dir().join("settings.json")
}

// ============================================================================
// Security: File Permissions
// ============================================================================

/// Sets owner-only file permissions (0o600) on Unix systems.
#[cfg(unix)]
fn set_restrictive_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o600);
    fs::set_permissions(path, perms)?;

    debug!(path = %path.display(), mode = "0600", "Set restrictive permissions");
    Ok(())
}

/// Sets owner-only directory permissions (0o700) on Unix systems.
#[cfg(unix)]
fn set_restrictive_dir_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o700);
    fs::set_permissions(path, perms)?;

    debug!(path = %path.display(), mode = "0700", "Set restrictive directory permissions");
    Ok(())
}

#[cfg(not(unix))]
fn set_restrictive_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

#[cfg(not(unix))]
fn set_restrictive_dir_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ============================================================================
// File Operations
// ============================================================================

/// Saves data to a JSON file with secure permissions.
///
/// Creates the parent directory if needed, writes atomically (temp file
/// then rename) and restricts the file to its owner on Unix.
///
/// # Errors
///
/// Returns `StoreError::Io` or `StoreError::Serialization` on failure.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    debug!(path = %path.display(), "Saving JSON file");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let json = serde_json::to_string_pretty(data)?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &json)?;
    fs::rename(&temp_path, path)?;

    set_restrictive_permissions(path)?;

    debug!(path = %path.display(), bytes = json.len(), "JSON file saved");
    Ok(())
}

/// Loads data from a JSON file.
///
/// # Errors
///
/// Returns `StoreError::Io` if the file cannot be read and
/// `StoreError::Serialization` if it does not parse.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    debug!(path = %path.display(), "Loading JSON file");

    let content = fs::read_to_string(path)?;
    let data = serde_json::from_str(&content)?;

    debug!(path = %path.display(), "JSON file loaded");
    Ok(data)
}

/// Loads data from a JSON file, returning the default if it is missing or
/// unreadable. Only parse failures are logged.
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json(path) {
        Ok(data) => data,
        Err(e) => {
            if !matches!(e, StoreError::Io(_)) {
                warn!(path = %path.display(), error = %e, "Failed to load, using defaults");
            }
            T::default()
        }
    }
}

/// Ensures a directory exists, creating it owner-only.
///
/// # Errors
///
/// Returns `StoreError::Io` if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "Creating directory");
        fs::create_dir_all(path)?;
        set_restrictive_dir_permissions(path)?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
