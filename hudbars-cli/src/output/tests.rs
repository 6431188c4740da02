//! CLI output formatting tests.
//!
//! These tests verify that CLI output is correctly formatted for both
//! text and JSON output modes.

#[cfg(test)]
fn leveling_bars() -> hudbars_bars::StatusBars {
    use hudbars_core::event::PLAYER_ENTERING_WORLD;
    use hudbars_core::{BarSettings, FactionStanding, GameClient, GameEvent, PlayerSnapshot};
    use std::sync::Arc;

    let client: Arc<dyn GameClient> = Arc::new(PlayerSnapshot {
        level: 30,
        xp: 1_000.0,
        xp_max: 4_000.0,
        watched_faction: Some(FactionStanding {
            name: "Stormwind".to_string(),
            standing: "Friendly".to_string(),
            bottom: 0.0,
            top: 6_000.0,
            value: 3_000.0,
        }),
        ..PlayerSnapshot::default()
    });
    let mut bars = hudbars_bars::StatusBars::with_client(&client, BarSettings::default()).unwrap();
    bars.handle_event(&GameEvent::new(PLAYER_ENTERING_WORLD))
        .unwrap();
    bars
}

#[cfg(test)]
mod text_formatter_tests {
    use super::super::json::LayoutOutput;
    use super::super::text::TextFormatter;
    use super::leveling_bars;
    use hudbars_bars::Action;
    use hudbars_core::BarSettings;

    #[test]
    fn test_progress_bar_boundary_values() {
        let formatter = TextFormatter::new(false).with_bar_width(10);

        let test_cases = vec![
            (0.0, "░░░░░░░░░░"),
            (10.0, "█░░░░░░░░░"),
            (25.0, "███░░░░░░░"), // 2.5 rounds to 3 blocks
            (50.0, "█████░░░░░"),
            (100.0, "██████████"),
        ];

        for (percent, expected) in test_cases {
            assert_eq!(formatter.progress_bar(percent), expected, "Failed for {percent}%");
        }
    }

    #[test]
    fn test_format_layout_slots() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_layout(&LayoutOutput::from_status_bars(&leveling_bars()));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Right: Experience  Left: Reputation");
        assert!(lines[1].contains("500x12 at BOTTOM"));
        assert!(output.contains("25.0% 1.0K / 4.0K"));
        assert!(output.contains("[right, 248, forward]"));
        assert!(output.contains("[left, 248, reversed]"));
    }

    #[test]
    fn test_hidden_bars_listed() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_layout(&LayoutOutput::from_status_bars(&leveling_bars()));

        let honor = output
            .lines()
            .find(|l| l.starts_with("HonorBar"))
            .unwrap();
        assert!(honor.ends_with("hidden"));
    }

    #[test]
    fn test_format_step_header() {
        let formatter = TextFormatter::new(false);
        let header = formatter.format_step_header(
            2,
            "PLAYER_XP_UPDATE",
            &[Action::UpdateBar("ExperienceBar".to_string()), Action::Arbitrate],
        );
        assert_eq!(header, "#2 PLAYER_XP_UPDATE -> update_bar(ExperienceBar), arbitrate");

        let empty = formatter.format_step_header(1, "UNIT_AURA", &[]);
        assert!(empty.ends_with("no actions"));
    }

    #[test]
    fn test_format_settings() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_settings(&BarSettings::default());
        assert!(output.contains("500 x 12 (spacing 4)"));
        assert!(output.contains("1 decimals, shown"));
        assert!(output.contains("ExperienceBar"));
    }

    #[test]
    fn test_format_providers_header() {
        let formatter = TextFormatter::new(false);
        let header = formatter.format_providers_header();
        assert!(header.contains("Provider"));
        assert!(header.contains("Events"));
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::{JsonFormatter, StepOutput, LayoutOutput};
    use super::leveling_bars;
    use hudbars_bars::Action;
    use hudbars_core::{GameClient, PlayerSnapshot};
    use hudbars_providers::{ProviderDescriptor, ProviderRegistry};
    use std::sync::Arc;

    #[test]
    fn test_format_pretty_json() {
        let formatter = JsonFormatter::new(true);
        let output = formatter.format(&serde_json::json!({"key": "value"})).unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_compact_json() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format(&serde_json::json!({"key": "value"})).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_format_layout() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_layout(&leveling_bars()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["right"], "experience");
        assert_eq!(parsed["left"], "reputation");
        assert_eq!(parsed["container"]["relativePoint"], "BOTTOM");
        assert_eq!(parsed["bars"].as_array().unwrap().len(), 4);

        let xp = &parsed["bars"][0];
        assert_eq!(xp["name"], "ExperienceBar");
        assert_eq!(xp["slot"], "right");
        assert_eq!(xp["fill"], "forward");
        assert_eq!(xp["percent"], 25.0);
        assert_eq!(xp["main"], true);
    }

    #[test]
    fn test_empty_slot_omitted() {
        let client: Arc<dyn GameClient> = Arc::new(PlayerSnapshot {
            level: 60,
            ..PlayerSnapshot::default()
        });
        let bars =
            hudbars_bars::StatusBars::with_client(&client, hudbars_core::BarSettings::default())
                .unwrap();

        let output = JsonFormatter::new(false).format_layout(&bars).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("right").is_none());
        assert!(parsed.get("left").is_none());
    }

    #[test]
    fn test_format_step_actions() {
        let step = StepOutput {
            step: 1,
            event: "PLAYER_ENTERING_WORLD".to_string(),
            actions: vec![Action::UpdateBar("ExperienceBar".to_string()), Action::Arbitrate],
            layout: LayoutOutput::from_status_bars(&leveling_bars()),
        };

        let output = JsonFormatter::new(false).format(&step).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed["actions"][0],
            serde_json::json!({"action": "update_bar", "bar": "ExperienceBar"})
        );
        assert_eq!(parsed["actions"][1], serde_json::json!({"action": "arbitrate"}));
    }

    #[test]
    fn test_format_providers() {
        let client: Arc<dyn GameClient> = Arc::new(PlayerSnapshot::default());
        let registry = ProviderRegistry::with_defaults(&client);
        let providers: Vec<&ProviderDescriptor> = registry
            .names()
            .iter()
            .filter_map(|name| registry.descriptor(name))
            .collect();

        let output = JsonFormatter::new(false).format_providers(&providers).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let list = parsed.as_array().unwrap();
        assert_eq!(list.len(), 4);
        assert!(list.iter().any(|p| p["bar"] == "HonorBar"));
        assert!(list.iter().all(|p| p["displayName"].is_string()));
    }
}
