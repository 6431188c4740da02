//! Provider descriptor system.
//!
//! A descriptor holds the static facts about a provider that are useful
//! without running it:
//! - Registry name and display name
//! - The main bar role it backs, if any
//! - The events it reacts to
//! - Its default bar color

use hudbars_core::{BarColor, MainBarRole};
use serde::Serialize;

// ============================================================================
// Provider Descriptor
// ============================================================================

/// Static description of a provider.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderDescriptor {
    /// Registry name.
    pub name: &'static str,
    /// Display name.
    pub display_name: &'static str,
    /// Main bar role this provider backs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MainBarRole>,
    /// Events the provider reacts to.
    pub events: &'static [&'static str],
    /// Default foreground color.
    pub color: BarColor,
    /// One-line description.
    pub description: &'static str,
}

impl ProviderDescriptor {
    /// Creates a descriptor for one of the main bar roles.
    pub fn for_role(
        role: MainBarRole,
        events: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            name: role.provider_name(),
            display_name: role.display_name(),
            role: Some(role),
            events,
            color: role.default_color(),
            description,
        }
    }

    /// Creates a descriptor for a provider that backs no main bar.
    pub fn standalone(name: &'static str, display_name: &'static str) -> Self {
        Self {
            name,
            display_name,
            role: None,
            events: &[],
            color: BarColor::default(),
            description: "",
        }
    }

    /// Returns true if this provider backs a main bar.
    pub fn is_main(&self) -> bool {
        self.role.is_some()
    }
}
