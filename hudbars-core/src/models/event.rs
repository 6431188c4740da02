//! Game events delivered by the host.
//!
//! Events are identified by name. Payloads are kept as opaque strings; only
//! providers interpret them.

use serde::{Deserialize, Serialize};

// ============================================================================
// Event Names
// ============================================================================

/// Fired on login and every loading screen. Every bar listens to it.
pub const PLAYER_ENTERING_WORLD: &str = "PLAYER_ENTERING_WORLD";
/// The account's expansion level changed.
pub const UPDATE_EXPANSION_LEVEL: &str = "UPDATE_EXPANSION_LEVEL";
/// Faction standings or the watched faction changed.
pub const UPDATE_FACTION: &str = "UPDATE_FACTION";
/// Experience gain was switched on.
pub const ENABLE_XP_GAIN: &str = "ENABLE_XP_GAIN";
/// Experience gain was switched off.
pub const DISABLE_XP_GAIN: &str = "DISABLE_XP_GAIN";
/// The player moved to a new subzone.
pub const ZONE_CHANGED: &str = "ZONE_CHANGED";
/// The player moved to a new zone.
pub const ZONE_CHANGED_NEW_AREA: &str = "ZONE_CHANGED_NEW_AREA";
/// A unit gained a level. Only the player's own level-up matters.
pub const PLAYER_LEVEL_UP: &str = "PLAYER_LEVEL_UP";
/// The host's own status-tracking manager changed its shown bars.
pub const STATUS_TRACKING_CHANGED: &str = "STATUS_TRACKING_BAR_MANAGER_UPDATE";

/// Player experience changed.
pub const PLAYER_XP_UPDATE: &str = "PLAYER_XP_UPDATE";
/// Rested experience changed.
pub const UPDATE_EXHAUSTION: &str = "UPDATE_EXHAUSTION";
/// The player entered or left a resting area.
pub const PLAYER_UPDATE_RESTING: &str = "PLAYER_UPDATE_RESTING";
/// Honor progress changed.
pub const HONOR_XP_UPDATE: &str = "HONOR_XP_UPDATE";
/// Honor level changed.
pub const HONOR_LEVEL_UPDATE: &str = "HONOR_LEVEL_UPDATE";
/// Azerite item experience changed.
pub const AZERITE_ITEM_EXPERIENCE_CHANGED: &str = "AZERITE_ITEM_EXPERIENCE_CHANGED";
/// Equipped items changed.
pub const PLAYER_EQUIPMENT_CHANGED: &str = "PLAYER_EQUIPMENT_CHANGED";

/// Unit token for the local player.
pub const PLAYER_UNIT: &str = "player";

/// Events that always re-run main bar arbitration.
pub const ARBITRATION_EVENTS: &[&str] = &[
    PLAYER_ENTERING_WORLD,
    UPDATE_EXPANSION_LEVEL,
    UPDATE_FACTION,
    ENABLE_XP_GAIN,
    DISABLE_XP_GAIN,
    ZONE_CHANGED,
    ZONE_CHANGED_NEW_AREA,
    PLAYER_LEVEL_UP,
    STATUS_TRACKING_CHANGED,
];

// ============================================================================
// Game Event
// ============================================================================

/// A single event as delivered by the host's dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Event name.
    pub name: String,
    /// Unit the event is scoped to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Raw event arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl GameEvent {
    /// Creates an unscoped event with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: None,
            args: Vec::new(),
        }
    }

    /// Creates an event scoped to `unit`.
    pub fn for_unit(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: Some(unit.into()),
            args: Vec::new(),
        }
    }

    /// Adds raw arguments.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Returns true if the event is unscoped or scoped to the local player.
    pub fn concerns_player(&self) -> bool {
        self.unit.as_deref().is_none_or(|u| u == PLAYER_UNIT)
    }

    /// Returns true if this event forces main bar arbitration.
    pub fn triggers_arbitration(&self) -> bool {
        if self.name == PLAYER_LEVEL_UP {
            return self.concerns_player();
        }
        ARBITRATION_EVENTS.contains(&self.name.as_str())
    }
}
