//! Experience provider.
//!
//! Tracks character experience until the level cap. When experience gain is
//! switched off the bar stays up but shows a status line instead of a ratio.

mod descriptor;
mod provider;

pub use descriptor::{EXPERIENCE_EVENTS, experience_descriptor};
pub use provider::ExperienceProvider;
