//! Main bar roles.
//!
//! The four fixed roles subject to slot arbitration. Role order (used when
//! iterating the main bar set) and priority order (used when assigning slots)
//! differ and are both fixed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::bar::BarColor;

/// One of the fixed-role main bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainBarRole {
    /// Character experience.
    Experience,
    /// Watched faction reputation.
    Reputation,
    /// PvP honor.
    Honor,
    /// Secondary resource (artifact power).
    Azerite,
}

impl MainBarRole {
    /// All roles in fixed role order.
    pub fn all() -> &'static [MainBarRole] {
        &[
            Self::Experience,
            Self::Reputation,
            Self::Honor,
            Self::Azerite,
        ]
    }

    /// All roles in slot priority order, highest first.
    pub fn by_priority() -> &'static [MainBarRole] {
        &[
            Self::Experience,
            Self::Azerite,
            Self::Honor,
            Self::Reputation,
        ]
    }

    /// Position in [`MainBarRole::by_priority`]; lower wins.
    pub fn priority(self) -> usize {
        match self {
            Self::Experience => 0,
            Self::Azerite => 1,
            Self::Honor => 2,
            Self::Reputation => 3,
        }
    }

    /// Name of the provider bundle backing this role.
    pub fn provider_name(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Reputation => "reputation",
            Self::Honor => "honor",
            Self::Azerite => "azerite",
        }
    }

    /// Name of the bar created for this role.
    pub fn bar_name(self) -> &'static str {
        match self {
            Self::Experience => "ExperienceBar",
            Self::Reputation => "ReputationBar",
            Self::Honor => "HonorBar",
            Self::Azerite => "AzeriteBar",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Reputation => "Reputation",
            Self::Honor => "Honor",
            Self::Azerite => "Azerite Power",
        }
    }

    /// Default foreground color.
    pub fn default_color(self) -> BarColor {
        match self {
            Self::Experience => BarColor::new(0.58, 0.0, 0.55),
            Self::Reputation => BarColor::new(0.0, 0.6, 0.1),
            Self::Honor => BarColor::new(1.0, 0.24, 0.0),
            Self::Azerite => BarColor::new(0.9, 0.8, 0.5),
        }
    }

    /// Looks up a role by bar name or provider name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.bar_name() == name || r.provider_name() == name)
    }
}

impl fmt::Display for MainBarRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
