//! Store error types.

use hudbars_core::CoreError;
use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rejected by the bar layer, usually failed settings validation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Returns true if the settings themselves were rejected.
    pub fn is_invalid_settings(&self) -> bool {
        matches!(
            self,
            StoreError::Config(_) | StoreError::Core(CoreError::InvalidConfig(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let io = StoreError::Io(std::io::Error::other("disk"));
        assert!(!io.is_invalid_settings());

        let config = StoreError::Config("bad width".into());
        assert!(config.is_invalid_settings());

        let invalid = StoreError::from(CoreError::InvalidConfig("width".into()));
        assert!(invalid.is_invalid_settings());
        assert_eq!(invalid.to_string(), "Invalid configuration: width");
    }
}
