//! Experience data provider.

use hudbars_core::{BarValues, DataProvider, GameClient, GameEvent, MainBarRole, TooltipLines};
use std::sync::Arc;
use tracing::debug;

use super::descriptor::EXPERIENCE_EVENTS;
use crate::text::{format_number, format_progress};

/// Text shown while experience gain is switched off.
pub const XP_DISABLED_TEXT: &str = "XP gain disabled";

/// Provider backing the experience bar.
pub struct ExperienceProvider {
    client: Arc<dyn GameClient>,
}

impl ExperienceProvider {
    /// Creates a provider reading from `client`.
    pub fn new(client: Arc<dyn GameClient>) -> Self {
        Self { client }
    }
}

impl DataProvider for ExperienceProvider {
    fn name(&self) -> &str {
        MainBarRole::Experience.provider_name()
    }

    fn events(&self) -> &[&'static str] {
        EXPERIENCE_EVENTS
    }

    fn should_be_visible(&self) -> bool {
        !self.client.is_max_level()
    }

    fn should_display_percent_text(&self) -> bool {
        !self.client.is_xp_disabled()
    }

    fn update(&self, event: &GameEvent, values: &mut BarValues) {
        let xp = self.client.current_xp();
        let max = self.client.max_xp();
        debug!(event = %event.name, xp, max, "Updating experience");
        *values = BarValues::new(0.0, xp, max);
    }

    fn data_text(&self) -> String {
        if self.client.is_xp_disabled() {
            return XP_DISABLED_TEXT.to_string();
        }

        let progress = format_progress(self.client.current_xp(), self.client.max_xp());
        match self.client.rested_xp() {
            Some(rested) if rested > 0.0 => {
                format!("{progress} ({} rested)", format_number(rested))
            }
            _ => progress,
        }
    }

    fn has_tooltip(&self) -> bool {
        true
    }

    fn set_tooltip_info(&self, tooltip: &mut TooltipLines) {
        let xp = self.client.current_xp();
        let max = self.client.max_xp();

        tooltip.add_line(format!("Level {}", self.client.player_level()));
        tooltip.add_double_line("Current", format_progress(xp, max));
        tooltip.add_double_line("Remaining", format_number((max - xp).max(0.0)));
        if let Some(rested) = self.client.rested_xp().filter(|r| *r > 0.0) {
            tooltip.add_double_line("Rested", format_number(rested));
        }
        if self.client.is_xp_disabled() {
            tooltip.add_line(XP_DISABLED_TEXT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hudbars_core::PlayerSnapshot;

    fn provider(state: PlayerSnapshot) -> ExperienceProvider {
        ExperienceProvider::new(Arc::new(state))
    }

    #[test]
    fn test_visible_below_cap() {
        let p = provider(PlayerSnapshot {
            level: 30,
            max_level: 60,
            ..PlayerSnapshot::default()
        });
        assert!(p.should_be_visible());
    }

    #[test]
    fn test_hidden_at_cap() {
        let p = provider(PlayerSnapshot {
            level: 60,
            max_level: 60,
            ..PlayerSnapshot::default()
        });
        assert!(!p.should_be_visible());
    }

    #[test]
    fn test_update_fills_values() {
        let p = provider(PlayerSnapshot {
            xp: 1_200.0,
            xp_max: 4_000.0,
            ..PlayerSnapshot::default()
        });
        let mut values = BarValues::default();
        p.update(&GameEvent::new("PLAYER_XP_UPDATE"), &mut values);
        assert_eq!(values, BarValues::new(0.0, 1_200.0, 4_000.0));
    }

    #[test]
    fn test_text_with_rested() {
        let p = provider(PlayerSnapshot {
            xp: 1_200.0,
            xp_max: 4_000.0,
            rested_xp: Some(300.0),
            ..PlayerSnapshot::default()
        });
        assert_eq!(p.data_text(), "1.2K / 4.0K (300 rested)");
    }

    #[test]
    fn test_disabled_xp_is_text_only() {
        let p = provider(PlayerSnapshot {
            xp_disabled: true,
            ..PlayerSnapshot::default()
        });
        assert!(p.should_be_visible());
        assert!(!p.should_display_percent_text());
        assert_eq!(p.data_text(), XP_DISABLED_TEXT);
    }

    #[test]
    fn test_tooltip() {
        let p = provider(PlayerSnapshot {
            level: 12,
            xp: 100.0,
            xp_max: 400.0,
            ..PlayerSnapshot::default()
        });
        let mut tooltip = TooltipLines::new();
        p.set_tooltip_info(&mut tooltip);
        let lines = tooltip.to_plain_lines();
        assert_eq!(lines[0], "Level 12");
        assert!(lines.contains(&"Remaining: 300".to_string()));
    }
}
