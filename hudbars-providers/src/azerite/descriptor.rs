//! Azerite provider descriptor.

use hudbars_core::MainBarRole;
use hudbars_core::event::{AZERITE_ITEM_EXPERIENCE_CHANGED, PLAYER_EQUIPMENT_CHANGED};

use crate::descriptor::ProviderDescriptor;

/// Events the azerite bar refreshes on.
pub const AZERITE_EVENTS: &[&str] = &[AZERITE_ITEM_EXPERIENCE_CHANGED, PLAYER_EQUIPMENT_CHANGED];

pub fn azerite_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::for_role(
        MainBarRole::Azerite,
        AZERITE_EVENTS,
        "Experience on the equipped azerite item",
    )
}
