//! Player state as seen by the providers.
//!
//! [`PlayerSnapshot`] is a plain, serializable view of everything the bar
//! providers query. [`SharedClient`] wraps one behind a lock so a host adapter
//! (or a replayed scenario) can change game state between events.

use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::traits::GameClient;

// ============================================================================
// Progress Records
// ============================================================================

/// The currently watched faction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactionStanding {
    /// Faction name.
    pub name: String,
    /// Standing label (e.g. "Honored").
    pub standing: String,
    /// Reputation at the bottom of the current standing.
    pub bottom: f64,
    /// Reputation at the top of the current standing.
    pub top: f64,
    /// Current reputation.
    pub value: f64,
}

/// Honor progress toward the next honor level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HonorProgress {
    /// Current honor level.
    pub level: u32,
    /// Honor earned in this level.
    pub current: f64,
    /// Honor needed for this level.
    pub max: f64,
    /// Whether the player chose to track honor.
    pub watched: bool,
}

impl Default for HonorProgress {
    fn default() -> Self {
        Self {
            level: 1,
            current: 0.0,
            max: 1.0,
            watched: false,
        }
    }
}

/// Experience on the equipped azerite item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzeriteProgress {
    /// Item level (power level, not item level).
    pub level: u32,
    /// Experience in this level.
    pub current: f64,
    /// Experience needed for this level.
    pub max: f64,
    /// True once the item can no longer gain experience.
    pub is_max_level: bool,
}

// ============================================================================
// Player Snapshot
// ============================================================================

/// Serializable view of the player's tracked progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSnapshot {
    /// Character level.
    pub level: u32,
    /// Level cap for the account's expansion.
    pub max_level: u32,
    /// Whether experience gain is switched off.
    pub xp_disabled: bool,
    /// Experience in the current level.
    pub xp: f64,
    /// Experience needed for the current level.
    pub xp_max: f64,
    /// Rested bonus, if any.
    pub rested_xp: Option<f64>,
    /// Watched faction, if any.
    pub watched_faction: Option<FactionStanding>,
    /// Honor progress.
    pub honor: HonorProgress,
    /// Equipped azerite item, if any.
    pub azerite: Option<AzeriteProgress>,
}

impl Default for PlayerSnapshot {
    fn default() -> Self {
        Self {
            level: 1,
            max_level: 60,
            xp_disabled: false,
            xp: 0.0,
            xp_max: 400.0,
            rested_xp: None,
            watched_faction: None,
            honor: HonorProgress::default(),
            azerite: None,
        }
    }
}

impl PlayerSnapshot {
    /// Returns true once the character has reached the level cap.
    pub fn is_max_level(&self) -> bool {
        self.level >= self.max_level
    }
}

impl GameClient for PlayerSnapshot {
    fn player_level(&self) -> u32 {
        self.level
    }

    fn max_player_level(&self) -> u32 {
        self.max_level
    }

    fn is_xp_disabled(&self) -> bool {
        self.xp_disabled
    }

    fn current_xp(&self) -> f64 {
        self.xp
    }

    fn max_xp(&self) -> f64 {
        self.xp_max
    }

    fn rested_xp(&self) -> Option<f64> {
        self.rested_xp
    }

    fn watched_faction(&self) -> Option<FactionStanding> {
        self.watched_faction.clone()
    }

    fn honor(&self) -> HonorProgress {
        self.honor.clone()
    }

    fn azerite_item(&self) -> Option<AzeriteProgress> {
        self.azerite.clone()
    }
}

// ============================================================================
// Shared Client
// ============================================================================

/// A [`PlayerSnapshot`] that can be replaced while providers hold a reference.
#[derive(Debug, Default)]
pub struct SharedClient {
    state: RwLock<PlayerSnapshot>,
}

impl SharedClient {
    /// Wraps a snapshot.
    pub fn new(state: PlayerSnapshot) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Returns a copy of the current snapshot.
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.read().clone()
    }

    /// Replaces the snapshot.
    pub fn replace(&self, state: PlayerSnapshot) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Mutates the snapshot in place.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut PlayerSnapshot),
    {
        f(&mut self.state.write().unwrap_or_else(PoisonError::into_inner));
    }

    fn read(&self) -> RwLockReadGuard<'_, PlayerSnapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GameClient for SharedClient {
    fn player_level(&self) -> u32 {
        self.read().player_level()
    }

    fn max_player_level(&self) -> u32 {
        self.read().max_player_level()
    }

    fn is_xp_disabled(&self) -> bool {
        self.read().is_xp_disabled()
    }

    fn current_xp(&self) -> f64 {
        self.read().current_xp()
    }

    fn max_xp(&self) -> f64 {
        self.read().max_xp()
    }

    fn rested_xp(&self) -> Option<f64> {
        self.read().rested_xp()
    }

    fn watched_faction(&self) -> Option<FactionStanding> {
        self.read().watched_faction()
    }

    fn honor(&self) -> HonorProgress {
        self.read().honor()
    }

    fn azerite_item(&self) -> Option<AzeriteProgress> {
        self.read().azerite_item()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_client_update_visible_to_readers() {
        let client = SharedClient::new(PlayerSnapshot::default());
        assert_eq!(client.player_level(), 1);

        client.update(|s| s.level = 42);
        assert_eq!(client.player_level(), 42);

        client.replace(PlayerSnapshot {
            level: 60,
            ..PlayerSnapshot::default()
        });
        assert!(client.snapshot().is_max_level());
    }

    #[test]
    fn test_snapshot_partial_json() {
        let snapshot: PlayerSnapshot =
            serde_json::from_str(r#"{"level": 12, "xp": 100}"#).unwrap();
        assert_eq!(snapshot.level, 12);
        assert_eq!(snapshot.xp, 100.0);
        assert_eq!(snapshot.max_level, 60);
        assert!(snapshot.watched_faction.is_none());
    }
}
