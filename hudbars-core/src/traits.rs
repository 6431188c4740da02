//! Trait definitions for `HudBars`.
//!
//! [`DataProvider`] is the capability bundle a bar delegates to.
//! [`GameClient`] is the read-only game-state seam providers query.

use crate::models::{
    AzeriteProgress, BarValues, FactionStanding, GameEvent, HonorProgress, TooltipLines,
};

/// Text shown by a provider that has nothing to report.
pub const NO_DATA_TEXT: &str = "No Data";

/// Capability bundle backing a bar.
///
/// Every method has a safe default (not visible, `0 / 0..1`, "No Data", no
/// tooltip) so a provider only overrides what it needs. Providers hold no
/// per-bar state and may back any number of bars.
///
/// `update` is the only method expected to change anything, and it only
/// writes the bar's values it is handed. Everything else is a query of
/// current game state.
pub trait DataProvider: Send + Sync {
    /// Registry name of this provider.
    fn name(&self) -> &str;

    /// Events, beyond the entering-world baseline, this provider reacts to.
    fn events(&self) -> &[&'static str] {
        &[]
    }

    /// Whether a bar backed by this provider wants to be shown.
    fn should_be_visible(&self) -> bool {
        false
    }

    /// Whether the bar text leads with a computed percentage.
    fn should_display_percent_text(&self) -> bool {
        true
    }

    /// Refreshes `values` from current game state.
    fn update(&self, _event: &GameEvent, values: &mut BarValues) {
        *values = BarValues::default();
    }

    /// Status text shown on the bar.
    fn data_text(&self) -> String {
        NO_DATA_TEXT.to_string()
    }

    /// Whether hovering the bar shows a tooltip.
    fn has_tooltip(&self) -> bool {
        false
    }

    /// Writes tooltip content.
    fn set_tooltip_info(&self, _tooltip: &mut TooltipLines) {}
}

/// A provider that keeps every default.
///
/// Registered when a bar needs a name to attach to before real logic exists.
#[derive(Debug, Clone)]
pub struct BasicProvider {
    name: String,
}

impl BasicProvider {
    /// Creates a provider with all default capabilities.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DataProvider for BasicProvider {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Read-only queries into the game client.
///
/// Implementations must be cheap and side-effect free; they run on every
/// bar refresh.
pub trait GameClient: Send + Sync {
    /// Character level.
    fn player_level(&self) -> u32;

    /// Level cap for the account's expansion.
    fn max_player_level(&self) -> u32;

    /// Whether experience gain is switched off.
    fn is_xp_disabled(&self) -> bool;

    /// Experience in the current level.
    fn current_xp(&self) -> f64;

    /// Experience needed for the current level.
    fn max_xp(&self) -> f64;

    /// Rested bonus, if any.
    fn rested_xp(&self) -> Option<f64>;

    /// Watched faction, if any.
    fn watched_faction(&self) -> Option<FactionStanding>;

    /// Honor progress.
    fn honor(&self) -> HonorProgress;

    /// Equipped azerite item, if any.
    fn azerite_item(&self) -> Option<AzeriteProgress>;

    /// Returns true once the character has reached the level cap.
    fn is_max_level(&self) -> bool {
        self.player_level() >= self.max_player_level()
    }
}
