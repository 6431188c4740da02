//! Reputation data provider.

use hudbars_core::{
    BarValues, DataProvider, FactionStanding, GameClient, GameEvent, MainBarRole, NO_DATA_TEXT,
    TooltipLines,
};
use std::sync::Arc;
use tracing::debug;

use super::descriptor::REPUTATION_EVENTS;
use crate::text::format_progress;

/// Provider backing the reputation bar.
pub struct ReputationProvider {
    client: Arc<dyn GameClient>,
}

impl ReputationProvider {
    /// Creates a provider reading from `client`.
    pub fn new(client: Arc<dyn GameClient>) -> Self {
        Self { client }
    }
}

/// Progress within the current standing, as `(earned, needed)`.
///
/// A standing with no range (the final one) reads as full.
fn standing_progress(faction: &FactionStanding) -> (f64, f64) {
    let span = faction.top - faction.bottom;
    if span > 0.0 {
        ((faction.value - faction.bottom).clamp(0.0, span), span)
    } else {
        (1.0, 1.0)
    }
}

impl DataProvider for ReputationProvider {
    fn name(&self) -> &str {
        MainBarRole::Reputation.provider_name()
    }

    fn events(&self) -> &[&'static str] {
        REPUTATION_EVENTS
    }

    fn should_be_visible(&self) -> bool {
        self.client.watched_faction().is_some()
    }

    fn update(&self, event: &GameEvent, values: &mut BarValues) {
        let Some(faction) = self.client.watched_faction() else {
            *values = BarValues::default();
            return;
        };

        let (earned, needed) = standing_progress(&faction);
        debug!(event = %event.name, faction = %faction.name, earned, needed, "Updating reputation");
        *values = BarValues::new(0.0, earned, needed);
    }

    fn data_text(&self) -> String {
        match self.client.watched_faction() {
            Some(faction) => format!("{} - {}", faction.name, faction.standing),
            None => NO_DATA_TEXT.to_string(),
        }
    }

    fn has_tooltip(&self) -> bool {
        self.client.watched_faction().is_some()
    }

    fn set_tooltip_info(&self, tooltip: &mut TooltipLines) {
        if let Some(faction) = self.client.watched_faction() {
            let (earned, needed) = standing_progress(&faction);
            tooltip.add_line(faction.name.clone());
            tooltip.add_double_line("Standing", faction.standing.clone());
            tooltip.add_double_line("Progress", format_progress(earned, needed));
        }
    }
}
