//! Reputation provider.
//!
//! Shown while a faction is watched. Values are relative to the bottom of
//! the current standing.

mod descriptor;
mod provider;

pub use descriptor::{REPUTATION_EVENTS, reputation_descriptor};
pub use provider::ReputationProvider;
