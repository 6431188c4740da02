// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `HudBars` Providers
//!
//! Data providers for the four main status bars.
//!
//! Each provider module includes:
//!
//! - **Descriptor**: Static facts (name, role, events, default color)
//! - **Provider**: The [`DataProvider`](hudbars_core::DataProvider)
//!   implementation over a [`GameClient`](hudbars_core::GameClient)
//!
//! ## Providers
//!
//! | Provider | Role | Visible when |
//! |----------|------|--------------|
//! | `experience` | Experience | Below the level cap |
//! | `reputation` | Reputation | A faction is watched |
//! | `honor` | Honor | At the level cap and honor is watched |
//! | `azerite` | Secondary | An azerite item can still gain power |
//!
//! ## Usage
//!
//! ```ignore
//! use hudbars_core::{GameClient, PlayerSnapshot};
//! use hudbars_providers::ProviderRegistry;
//! use std::sync::Arc;
//!
//! let client: Arc<dyn GameClient> = Arc::new(PlayerSnapshot::default());
//! let registry = ProviderRegistry::with_defaults(&client);
//! let xp = registry.require("experience")?;
//! ```

pub mod descriptor;
pub mod registry;
pub mod text;

// Provider modules (alphabetical)
pub mod azerite;
pub mod experience;
pub mod honor;
pub mod reputation;

// Re-export key types
pub use descriptor::ProviderDescriptor;
pub use registry::ProviderRegistry;

// Re-export provider descriptors
pub use azerite::azerite_descriptor;
pub use experience::experience_descriptor;
pub use honor::honor_descriptor;
pub use reputation::reputation_descriptor;

// Re-export provider types
pub use azerite::AzeriteProvider;
pub use experience::ExperienceProvider;
pub use honor::HonorProvider;
pub use reputation::ReputationProvider;
