//! Azerite provider.
//!
//! The secondary resource bar. Shown while an azerite item is equipped and
//! can still gain experience.

mod descriptor;
mod provider;

pub use descriptor::{AZERITE_EVENTS, azerite_descriptor};
pub use provider::AzeriteProvider;
