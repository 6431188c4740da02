//! Core error types for `HudBars`.

use thiserror::Error;

/// Core error type for `HudBars` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A bar referenced a provider name that was never registered.
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// A bar with this name already exists.
    #[error("Bar already exists: {0}")]
    DuplicateBar(String),

    /// One of the fixed-role main bars was not created.
    #[error("Main bar missing: {0}")]
    MissingMainBar(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Returns true if this error aborts bar setup.
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            CoreError::ProviderNotFound(_)
                | CoreError::DuplicateBar(_)
                | CoreError::MissingMainBar(_)
        )
    }
}
