//! Provider registry.
//!
//! Maps provider names to shared capability bundles. Bars look providers up
//! here by name when they are created; the registry is filled once during
//! setup and only read afterwards.

use hudbars_core::{BasicProvider, CoreError, DataProvider, GameClient, MainBarRole};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::azerite::{AzeriteProvider, azerite_descriptor};
use crate::descriptor::ProviderDescriptor;
use crate::experience::{ExperienceProvider, experience_descriptor};
use crate::honor::{HonorProvider, honor_descriptor};
use crate::reputation::{ReputationProvider, reputation_descriptor};

// ============================================================================
// Provider Registry
// ============================================================================

/// Named provider bundles, in registration order.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn DataProvider>>,
    descriptors: HashMap<String, ProviderDescriptor>,
    order: Vec<String>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the four main bar providers.
    pub fn with_defaults(client: &Arc<dyn GameClient>) -> Self {
        let mut registry = Self::new();
        registry.register_with_descriptor(
            Arc::new(ExperienceProvider::new(Arc::clone(client))),
            experience_descriptor(),
        );
        registry.register_with_descriptor(
            Arc::new(ReputationProvider::new(Arc::clone(client))),
            reputation_descriptor(),
        );
        registry.register_with_descriptor(
            Arc::new(HonorProvider::new(Arc::clone(client))),
            honor_descriptor(),
        );
        registry.register_with_descriptor(
            Arc::new(AzeriteProvider::new(Arc::clone(client))),
            azerite_descriptor(),
        );
        registry
    }

    /// Registers a provider under its own name.
    ///
    /// Re-registering a name replaces the earlier bundle; the replaced bundle
    /// is returned and a warning is logged.
    pub fn register(&mut self, provider: Arc<dyn DataProvider>) -> Option<Arc<dyn DataProvider>> {
        let name = provider.name().to_string();
        let previous = self.providers.insert(name.clone(), provider);

        if previous.is_some() {
            warn!(provider = %name, "Provider registered twice, replacing earlier bundle");
        } else {
            debug!(provider = %name, "Registered provider");
            self.order.push(name);
        }

        previous
    }

    /// Registers a provider together with its descriptor.
    pub fn register_with_descriptor(
        &mut self,
        provider: Arc<dyn DataProvider>,
        descriptor: ProviderDescriptor,
    ) -> Option<Arc<dyn DataProvider>> {
        self.descriptors
            .insert(provider.name().to_string(), descriptor);
        self.register(provider)
    }

    /// Registers a provider with every capability left at its default.
    pub fn create_provider(&mut self, name: &str) -> Arc<dyn DataProvider> {
        let provider: Arc<dyn DataProvider> = Arc::new(BasicProvider::new(name));
        self.register(Arc::clone(&provider));
        provider
    }

    /// Gets a provider by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn DataProvider>> {
        self.providers.get(name).cloned()
    }

    /// Gets a provider by name, failing if it was never registered.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ProviderNotFound` for unknown names.
    pub fn require(&self, name: &str) -> Result<Arc<dyn DataProvider>, CoreError> {
        self.get(name)
            .ok_or_else(|| CoreError::ProviderNotFound(name.to_string()))
    }

    /// Gets the descriptor registered for a provider.
    pub fn descriptor(&self, name: &str) -> Option<&ProviderDescriptor> {
        self.descriptors.get(name)
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Provider names in registration order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Returns the number of registered providers.
    pub fn count(&self) -> usize {
        self.order.len()
    }

    /// Checks that every main bar role has a provider.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ProviderNotFound` for the first missing role.
    pub fn ensure_main_providers(&self) -> Result<(), CoreError> {
        for role in MainBarRole::all() {
            self.require(role.provider_name())?;
        }
        Ok(())
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.order)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hudbars_core::{NO_DATA_TEXT, PlayerSnapshot};

    fn client() -> Arc<dyn GameClient> {
        Arc::new(PlayerSnapshot::default())
    }

    #[test]
    fn test_defaults_register_all_main_providers() {
        let registry = ProviderRegistry::with_defaults(&client());
        assert_eq!(registry.count(), 4);
        assert!(registry.ensure_main_providers().is_ok());

        for role in MainBarRole::all() {
            let desc = registry.descriptor(role.provider_name()).unwrap();
            assert_eq!(desc.role, Some(*role));
            assert!(!desc.events.is_empty());
        }
    }

    #[test]
    fn test_registration_order() {
        let registry = ProviderRegistry::with_defaults(&client());
        assert_eq!(
            registry.names(),
            &["experience", "reputation", "honor", "azerite"]
        );
    }

    #[test]
    fn test_require_unknown_fails() {
        let registry = ProviderRegistry::new();
        let err = registry.require("mana").err().unwrap();
        assert!(matches!(err, CoreError::ProviderNotFound(ref n) if n == "mana"));
    }

    #[test]
    fn test_missing_main_provider_detected() {
        let mut registry = ProviderRegistry::new();
        registry.create_provider("experience");
        assert!(registry.ensure_main_providers().is_err());
    }

    #[test]
    fn test_create_provider_has_defaults() {
        let mut registry = ProviderRegistry::new();
        let provider = registry.create_provider("custom");
        assert!(!provider.should_be_visible());
        assert_eq!(provider.data_text(), NO_DATA_TEXT);
        assert!(registry.contains("custom"));
    }

    #[test]
    fn test_double_registration_replaces_and_reports() {
        let mut registry = ProviderRegistry::new();
        registry.create_provider("custom");
        let previous = registry.register(Arc::new(BasicProvider::new("custom")));
        assert!(previous.is_some());
        assert_eq!(registry.count(), 1);
    }
}
