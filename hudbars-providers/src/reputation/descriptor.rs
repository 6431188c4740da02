//! Reputation provider descriptor.

use hudbars_core::MainBarRole;
use hudbars_core::event::UPDATE_FACTION;

use crate::descriptor::ProviderDescriptor;

/// Events the reputation bar refreshes on.
pub const REPUTATION_EVENTS: &[&str] = &[UPDATE_FACTION];

pub fn reputation_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::for_role(
        MainBarRole::Reputation,
        REPUTATION_EVENTS,
        "Standing with the watched faction",
    )
}
