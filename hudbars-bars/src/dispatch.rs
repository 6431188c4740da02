//! Event routing.
//!
//! [`route`] decides what an event should do without touching any bar;
//! [`StatusBars`](crate::StatusBars) applies the result.

use hudbars_core::GameEvent;
use serde::Serialize;
use std::fmt;

use crate::registry::BarRegistry;

/// One step of handling an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "bar", rename_all = "snake_case")]
pub enum Action {
    /// Show or hide a standalone bar per its provider.
    UpdateVisibility(String),
    /// Refresh a bar's values and text.
    UpdateBar(String),
    /// Re-run main bar arbitration.
    Arbitrate,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::UpdateVisibility(bar) => write!(f, "update_visibility({bar})"),
            Action::UpdateBar(bar) => write!(f, "update_bar({bar})"),
            Action::Arbitrate => write!(f, "arbitrate"),
        }
    }
}

/// Works out the actions for `event`.
///
/// Bars listening to the event are refreshed in creation order; standalone
/// bars re-check their visibility first. Events in the arbitration set end
/// with [`Action::Arbitrate`], which refreshes the slotted main bars itself,
/// so main bars get no separate update in that case.
pub fn route(event: &GameEvent, bars: &BarRegistry) -> Vec<Action> {
    if !event.concerns_player() {
        return Vec::new();
    }

    let arbitrate = event.triggers_arbitration();
    let mut actions = Vec::new();

    for bar in bars.bars().filter(|bar| bar.listens_to(event)) {
        let name = bar.name().to_string();
        if bars.is_main(&name) {
            if !arbitrate {
                actions.push(Action::UpdateBar(name));
            }
        } else {
            actions.push(Action::UpdateVisibility(name.clone()));
            actions.push(Action::UpdateBar(name));
        }
    }

    if arbitrate {
        actions.push(Action::Arbitrate);
    }
    actions
}
