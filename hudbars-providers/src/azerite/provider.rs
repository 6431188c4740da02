//! Azerite data provider.

use hudbars_core::{
    BarValues, DataProvider, GameClient, GameEvent, MainBarRole, NO_DATA_TEXT, TooltipLines,
};
use std::sync::Arc;
use tracing::debug;

use super::descriptor::AZERITE_EVENTS;
use crate::text::format_progress;

/// Provider backing the secondary resource bar.
pub struct AzeriteProvider {
    client: Arc<dyn GameClient>,
}

impl AzeriteProvider {
    /// Creates a provider reading from `client`.
    pub fn new(client: Arc<dyn GameClient>) -> Self {
        Self { client }
    }
}

impl DataProvider for AzeriteProvider {
    fn name(&self) -> &str {
        MainBarRole::Azerite.provider_name()
    }

    fn events(&self) -> &[&'static str] {
        AZERITE_EVENTS
    }

    fn should_be_visible(&self) -> bool {
        self.client
            .azerite_item()
            .is_some_and(|item| !item.is_max_level)
    }

    fn update(&self, event: &GameEvent, values: &mut BarValues) {
        *values = match self.client.azerite_item() {
            Some(item) => {
                debug!(event = %event.name, level = item.level, current = item.current, "Updating azerite");
                BarValues::new(0.0, item.current, item.max)
            }
            None => BarValues::default(),
        };
    }

    fn data_text(&self) -> String {
        match self.client.azerite_item() {
            Some(item) => format!("Level {}", item.level),
            None => NO_DATA_TEXT.to_string(),
        }
    }

    fn has_tooltip(&self) -> bool {
        self.client.azerite_item().is_some()
    }

    fn set_tooltip_info(&self, tooltip: &mut TooltipLines) {
        if let Some(item) = self.client.azerite_item() {
            tooltip.add_line(format!("Heart of Azeroth (Level {})", item.level));
            tooltip.add_double_line("Azerite Power", format_progress(item.current, item.max));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hudbars_core::{AzeriteProgress, PlayerSnapshot};

    fn provider(item: Option<AzeriteProgress>) -> AzeriteProvider {
        AzeriteProvider::new(Arc::new(PlayerSnapshot {
            azerite: item,
            ..PlayerSnapshot::default()
        }))
    }

    fn item(is_max_level: bool) -> AzeriteProgress {
        AzeriteProgress {
            level: 27,
            current: 9_000.0,
            max: 36_000.0,
            is_max_level,
        }
    }

    #[test]
    fn test_visibility() {
        assert!(!provider(None).should_be_visible());
        assert!(provider(Some(item(false))).should_be_visible());
        assert!(!provider(Some(item(true))).should_be_visible());
    }

    #[test]
    fn test_update_and_text() {
        let p = provider(Some(item(false)));
        let mut values = BarValues::default();
        p.update(&GameEvent::new("AZERITE_ITEM_EXPERIENCE_CHANGED"), &mut values);
        assert_eq!(values.percent(), 25.0);
        assert_eq!(p.data_text(), "Level 27");
    }

    #[test]
    fn test_no_item_defaults() {
        let p = provider(None);
        let mut values = BarValues::new(0.0, 3.0, 4.0);
        p.update(&GameEvent::new("PLAYER_EQUIPMENT_CHANGED"), &mut values);
        assert_eq!(values, BarValues::default());
        assert_eq!(p.data_text(), NO_DATA_TEXT);
    }
}
