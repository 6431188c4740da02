//! Experience provider descriptor.

use hudbars_core::MainBarRole;
use hudbars_core::event::{
    DISABLE_XP_GAIN, ENABLE_XP_GAIN, PLAYER_LEVEL_UP, PLAYER_UPDATE_RESTING, PLAYER_XP_UPDATE,
    UPDATE_EXHAUSTION,
};

use crate::descriptor::ProviderDescriptor;

/// Events the experience bar refreshes on.
pub const EXPERIENCE_EVENTS: &[&str] = &[
    PLAYER_XP_UPDATE,
    UPDATE_EXHAUSTION,
    PLAYER_UPDATE_RESTING,
    PLAYER_LEVEL_UP,
    ENABLE_XP_GAIN,
    DISABLE_XP_GAIN,
];

pub fn experience_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::for_role(
        MainBarRole::Experience,
        EXPERIENCE_EVENTS,
        "Character experience toward the next level",
    )
}
