//! Honor provider descriptor.

use hudbars_core::MainBarRole;
use hudbars_core::event::{HONOR_LEVEL_UPDATE, HONOR_XP_UPDATE};

use crate::descriptor::ProviderDescriptor;

/// Events the honor bar refreshes on.
pub const HONOR_EVENTS: &[&str] = &[HONOR_XP_UPDATE, HONOR_LEVEL_UPDATE];

pub fn honor_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::for_role(
        MainBarRole::Honor,
        HONOR_EVENTS,
        "Honor toward the next honor level",
    )
}
