//! Honor data provider.

use hudbars_core::{BarValues, DataProvider, GameClient, GameEvent, MainBarRole, TooltipLines};
use std::sync::Arc;
use tracing::debug;

use super::descriptor::HONOR_EVENTS;
use crate::text::{format_number, format_progress};

/// Provider backing the honor bar.
pub struct HonorProvider {
    client: Arc<dyn GameClient>,
}

impl HonorProvider {
    /// Creates a provider reading from `client`.
    pub fn new(client: Arc<dyn GameClient>) -> Self {
        Self { client }
    }
}

impl DataProvider for HonorProvider {
    fn name(&self) -> &str {
        MainBarRole::Honor.provider_name()
    }

    fn events(&self) -> &[&'static str] {
        HONOR_EVENTS
    }

    // Honor only competes for a slot once leveling is over.
    fn should_be_visible(&self) -> bool {
        self.client.is_max_level() && self.client.honor().watched
    }

    fn update(&self, event: &GameEvent, values: &mut BarValues) {
        let honor = self.client.honor();
        debug!(event = %event.name, level = honor.level, current = honor.current, "Updating honor");
        *values = BarValues::new(0.0, honor.current, honor.max);
    }

    fn data_text(&self) -> String {
        format!("Honor Level {}", self.client.honor().level)
    }

    fn has_tooltip(&self) -> bool {
        true
    }

    fn set_tooltip_info(&self, tooltip: &mut TooltipLines) {
        let honor = self.client.honor();
        tooltip.add_line(format!("Honor Level {}", honor.level));
        tooltip.add_double_line("Progress", format_progress(honor.current, honor.max));
        tooltip.add_double_line(
            "To next level",
            format_number((honor.max - honor.current).max(0.0)),
        );
    }
}
