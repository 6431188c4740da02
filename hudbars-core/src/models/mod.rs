//! Domain models for `HudBars`.
//!
//! ## Submodules
//!
//! - [`bar`] - Bar values, colors, fill direction, anchor points
//! - [`role`] - The fixed main bar roles
//! - [`event`] - Game events and event names
//! - [`settings`] - Layout settings snapshot
//! - [`tooltip`] - Tooltip content
//! - [`player`] - Player state snapshot

pub mod bar;
pub mod event;
mod player;
mod role;
mod settings;
mod tooltip;

pub use bar::{AnchorPoint, BACKGROUND_TINT, BarColor, BarValues, FillDirection};
pub use event::GameEvent;
pub use player::{AzeriteProgress, FactionStanding, HonorProgress, PlayerSnapshot, SharedClient};
pub use role::MainBarRole;
pub use settings::{BarSettings, MAX_TEXT_PRECISION};
pub use tooltip::{TooltipLine, TooltipLines};
