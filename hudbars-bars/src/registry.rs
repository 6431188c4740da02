//! Bar registry.
//!
//! Owns every bar and the provider registry bars are composed from. Filled
//! during setup; afterwards only bar state changes.

use hudbars_core::{CoreError, DataProvider, MainBarRole};
use hudbars_providers::ProviderRegistry;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::bar::Bar;

/// All bars and providers, by name.
#[derive(Debug, Default)]
pub struct BarRegistry {
    providers: ProviderRegistry,
    bars: HashMap<String, Bar>,
    order: Vec<String>,
    main_bars: Vec<(MainBarRole, String)>,
}

impl BarRegistry {
    /// Creates a registry over existing providers.
    pub fn new(providers: ProviderRegistry) -> Self {
        Self {
            providers,
            ..Self::default()
        }
    }

    /// The provider registry.
    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// Registers a provider with default capabilities under `name`.
    pub fn create_provider(&mut self, name: &str) -> Arc<dyn DataProvider> {
        self.providers.create_provider(name)
    }

    /// Registers a provider, replacing any bundle with the same name.
    pub fn register_provider(
        &mut self,
        provider: Arc<dyn DataProvider>,
    ) -> Option<Arc<dyn DataProvider>> {
        self.providers.register(provider)
    }

    /// Creates a bar composed with the provider named `provider_name`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ProviderNotFound` if the provider is not registered
    /// and `CoreError::DuplicateBar` if a bar named `name` already exists.
    /// Existing bars are never replaced.
    pub fn create_bar(&mut self, name: &str, provider_name: &str) -> Result<&mut Bar, CoreError> {
        let provider = self.providers.require(provider_name)?;

        match self.bars.entry(name.to_string()) {
            Entry::Occupied(_) => {
                warn!(bar = %name, provider = %provider_name, "Bar already exists");
                Err(CoreError::DuplicateBar(name.to_string()))
            }
            Entry::Vacant(entry) => {
                debug!(bar = %name, provider = %provider_name, "Created bar");
                self.order.push(name.to_string());
                Ok(entry.insert(Bar::new(name, provider)))
            }
        }
    }

    /// Creates the fixed-role main bars.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ProviderNotFound` if any role's provider is missing
    /// and `CoreError::DuplicateBar` if any main bar name is already taken.
    /// Nothing is created in either case.
    pub fn create_main_bars(&mut self) -> Result<(), CoreError> {
        self.providers.ensure_main_providers()?;
        if let Some(role) = MainBarRole::all()
            .iter()
            .find(|role| self.bars.contains_key(role.bar_name()))
        {
            return Err(CoreError::DuplicateBar(role.bar_name().to_string()));
        }

        for role in MainBarRole::all() {
            self.create_bar(role.bar_name(), role.provider_name())?;
            self.main_bars.push((*role, role.bar_name().to_string()));
        }
        Ok(())
    }

    /// Main bars in fixed role order.
    ///
    /// Restartable: every call yields all main bars again from the start.
    pub fn iterate_main_bars(&self) -> impl Iterator<Item = &Bar> + '_ {
        self.main_bars
            .iter()
            .filter_map(|(_, name)| self.bars.get(name))
    }

    /// The bar holding `role`.
    pub fn main_bar(&self, role: MainBarRole) -> Option<&Bar> {
        self.main_bar_name(role).and_then(|name| self.bars.get(name))
    }

    /// The bar holding `role`, mutably.
    pub fn main_bar_mut(&mut self, role: MainBarRole) -> Option<&mut Bar> {
        let name = self.main_bar_name(role)?.to_string();
        self.bars.get_mut(&name)
    }

    /// The bar holding `role`, failing if main bars were never created.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingMainBar` if no bar holds `role`.
    pub fn require_main_bar(&self, role: MainBarRole) -> Result<&Bar, CoreError> {
        self.main_bar(role)
            .ok_or_else(|| CoreError::MissingMainBar(role.bar_name().to_string()))
    }

    /// Returns true if `name` is one of the main bars.
    pub fn is_main(&self, name: &str) -> bool {
        self.main_bars.iter().any(|(_, n)| n == name)
    }

    /// Gets a bar by name.
    pub fn bar(&self, name: &str) -> Option<&Bar> {
        self.bars.get(name)
    }

    /// Gets a bar by name, mutably.
    pub fn bar_mut(&mut self, name: &str) -> Option<&mut Bar> {
        self.bars.get_mut(name)
    }

    /// All bars in creation order.
    pub fn bars(&self) -> impl Iterator<Item = &Bar> + '_ {
        self.order.iter().filter_map(|name| self.bars.get(name))
    }

    /// All bars, mutably, in no particular order.
    pub fn bars_mut(&mut self) -> impl Iterator<Item = &mut Bar> + '_ {
        self.bars.values_mut()
    }

    /// Bar names in creation order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    fn main_bar_name(&self, role: MainBarRole) -> Option<&str> {
        self.main_bars
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, name)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hudbars_core::{GameClient, PlayerSnapshot};

    fn registry() -> BarRegistry {
        let client: Arc<dyn GameClient> = Arc::new(PlayerSnapshot::default());
        BarRegistry::new(ProviderRegistry::with_defaults(&client))
    }

    #[test]
    fn test_create_bar_unknown_provider() {
        let mut bars = registry();
        let err = bars.create_bar("ManaBar", "mana").unwrap_err();
        assert!(matches!(err, CoreError::ProviderNotFound(ref n) if n == "mana"));
        assert!(bars.bar("ManaBar").is_none());
    }

    #[test]
    fn test_main_bars_in_role_order() {
        let mut bars = registry();
        bars.create_main_bars().unwrap();

        let names: Vec<_> = bars.iterate_main_bars().map(Bar::name).collect();
        assert_eq!(names, ["ExperienceBar", "ReputationBar", "HonorBar", "AzeriteBar"]);
    }

    #[test]
    fn test_iterate_main_bars_restartable() {
        let mut bars = registry();
        bars.create_main_bars().unwrap();

        assert_eq!(bars.iterate_main_bars().count(), 4);
        assert_eq!(bars.iterate_main_bars().count(), 4);
    }

    #[test]
    fn test_create_main_bars_fails_fast() {
        let mut bars = BarRegistry::new(ProviderRegistry::new());
        bars.create_provider("experience");
        bars.create_provider("reputation");

        assert!(bars.create_main_bars().is_err());
        assert_eq!(bars.iterate_main_bars().count(), 0);
        assert!(bars.names().is_empty());
    }

    #[test]
    fn test_standalone_bar_is_not_main() {
        let mut bars = registry();
        bars.create_main_bars().unwrap();
        bars.create_provider("custom");
        bars.create_bar("CustomBar", "custom").unwrap();

        assert!(!bars.is_main("CustomBar"));
        assert!(bars.is_main("HonorBar"));
        assert_eq!(bars.names().len(), 5);
    }

    #[test]
    fn test_create_bar_never_replaces_main_bar() {
        let mut bars = registry();
        bars.create_main_bars().unwrap();

        let err = bars.create_bar("ExperienceBar", "azerite").unwrap_err();
        assert!(matches!(err, CoreError::DuplicateBar(ref n) if n == "ExperienceBar"));
        assert!(err.is_setup_error());

        let xp = bars.require_main_bar(MainBarRole::Experience).unwrap();
        assert_eq!(xp.provider().name(), "experience");
        assert_eq!(bars.iterate_main_bars().count(), 4);
        assert_eq!(bars.names().len(), 4);
    }

    #[test]
    fn test_create_bar_rejects_duplicate_standalone_name() {
        let mut bars = registry();
        bars.create_provider("custom");
        bars.create_bar("CustomBar", "custom").unwrap();

        assert!(matches!(
            bars.create_bar("CustomBar", "honor"),
            Err(CoreError::DuplicateBar(_))
        ));
        assert_eq!(bars.bar("CustomBar").unwrap().provider().name(), "custom");
        assert_eq!(bars.names(), ["CustomBar"]);
    }

    #[test]
    fn test_main_bar_name_taken_before_setup() {
        let mut bars = registry();
        bars.create_bar("HonorBar", "azerite").unwrap();

        assert!(matches!(bars.create_main_bars(), Err(CoreError::DuplicateBar(ref n)) if n == "HonorBar"));
        assert_eq!(bars.iterate_main_bars().count(), 0);
        assert_eq!(bars.names(), ["HonorBar"]);
    }

    #[test]
    fn test_require_main_bar_before_creation() {
        let bars = registry();
        assert!(matches!(
            bars.require_main_bar(MainBarRole::Honor),
            Err(CoreError::MissingMainBar(_))
        ));
    }
}
