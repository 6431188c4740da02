//! Game state and event script files.
//!
//! A state file is a JSON `PlayerSnapshot`; missing fields take their
//! defaults. A script is a JSON array of steps:
//!
//! ```json
//! [
//!   {"event": "PLAYER_ENTERING_WORLD"},
//!   {"state": {"level": 60}, "event": "PLAYER_LEVEL_UP", "unit": "player"}
//! ]
//! ```
//!
//! A step's `state` is merged key by key over the current snapshot before
//! its event fires.

use anyhow::{Context, Result};
use hudbars_core::{GameEvent, PlayerSnapshot};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// One scripted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Snapshot fields to change before the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    /// Event name.
    pub event: String,
    /// Unit the event is scoped to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Event payload.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl ScriptStep {
    /// The event this step fires.
    pub fn to_event(&self) -> GameEvent {
        let event = match &self.unit {
            Some(unit) => GameEvent::for_unit(self.event.clone(), unit.clone()),
            None => GameEvent::new(self.event.clone()),
        };
        event.with_args(self.args.iter().cloned())
    }

    /// Applies this step's state changes on top of `current`.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged state is not a valid snapshot.
    pub fn apply_state(&self, current: &PlayerSnapshot) -> Result<PlayerSnapshot, serde_json::Error> {
        let Some(Value::Object(changes)) = &self.state else {
            return Ok(current.clone());
        };

        let mut merged = serde_json::to_value(current)?;
        if let Value::Object(fields) = &mut merged {
            for (key, value) in changes {
                fields.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(merged)
    }
}

/// Parses a script.
///
/// # Errors
///
/// Returns an error if the JSON is not a list of steps.
pub fn parse_script(json: &str) -> Result<Vec<ScriptStep>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let steps = parse_script(&content)
        .with_context(|| format!("Invalid script {}", path.display()))?;
    debug!(path = %path.display(), steps = steps.len(), "Loaded script");
    Ok(steps)
}

/// Reads a state file, or returns the default snapshot without one.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_state(path: Option<&Path>) -> Result<PlayerSnapshot> {
    let Some(path) = path else {
        return Ok(PlayerSnapshot::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read state {}", path.display()))?;
    let state = serde_json::from_str(&content)
        .with_context(|| format!("Invalid state {}", path.display()))?;
    debug!(path = %path.display(), "Loaded game state");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let steps = parse_script(
            r#"[
                {"event": "PLAYER_ENTERING_WORLD"},
                {"state": {"level": 60}, "event": "PLAYER_LEVEL_UP", "unit": "player", "args": ["60"]}
            ]"#,
        )
        .unwrap();

        assert_eq!(steps.len(), 2);
        assert!(steps[0].state.is_none());

        let event = steps[1].to_event();
        assert_eq!(event.name, "PLAYER_LEVEL_UP");
        assert_eq!(event.unit.as_deref(), Some("player"));
        assert_eq!(event.args, vec!["60".to_string()]);
        assert!(event.triggers_arbitration());
    }

    #[test]
    fn test_state_merges_over_current() {
        let current = PlayerSnapshot {
            level: 30,
            xp: 150.0,
            ..PlayerSnapshot::default()
        };
        let step = ScriptStep {
            state: Some(serde_json::json!({"level": 31})),
            event: "PLAYER_LEVEL_UP".to_string(),
            unit: None,
            args: Vec::new(),
        };

        let next = step.apply_state(&current).unwrap();
        assert_eq!(next.level, 31);
        assert_eq!(next.xp, 150.0);
    }

    #[test]
    fn test_invalid_state_is_an_error() {
        let step = ScriptStep {
            state: Some(serde_json::json!({"level": "high"})),
            event: "PLAYER_LEVEL_UP".to_string(),
            unit: None,
            args: Vec::new(),
        };
        assert!(step.apply_state(&PlayerSnapshot::default()).is_err());
    }

    #[test]
    fn test_missing_state_file_defaults() {
        assert_eq!(load_state(None).unwrap(), PlayerSnapshot::default());
    }

    #[test]
    fn test_bundled_demo_script_parses() {
        let steps = parse_script(include_str!("../../demos/leveling.json")).unwrap();
        assert_eq!(steps.len(), 5);

        let mut state = PlayerSnapshot::default();
        for step in &steps {
            state = step.apply_state(&state).unwrap();
        }
        assert_eq!(state.level, 60);
        assert!(state.watched_faction.is_none());
        assert!(state.honor.watched);
    }
}
