//! Main bar slot arbitration.
//!
//! Decides which of the main bars occupy the container's right and left
//! slots, then lays them out. The decision is a pure function of the
//! providers' current visibility; nothing carries over between runs except
//! what is kept for change detection and logging.
//!
//! ## Priority
//!
//! Experience > Azerite > Honor > Reputation. The highest-priority visible
//! bar takes the right slot; the next visible one takes the left slot. Any
//! other bar is hidden, even if its provider wants to be shown.

use hudbars_core::{
    AnchorPoint, BarSettings, CoreError, FillDirection, GameEvent, MainBarRole,
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::frame::{CONTAINER_NAME, FramePoint};
use crate::registry::BarRegistry;

// ============================================================================
// Inputs & Outputs
// ============================================================================

/// Visibility wanted by each main bar's provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct VisibilityFlags {
    /// Experience provider wants to be shown.
    pub experience: bool,
    /// Reputation provider wants to be shown.
    pub reputation: bool,
    /// Honor provider wants to be shown.
    pub honor: bool,
    /// Azerite provider wants to be shown.
    pub azerite: bool,
}

impl VisibilityFlags {
    /// Builds flags by asking `f` for each role.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(MainBarRole) -> bool,
    {
        Self {
            experience: f(MainBarRole::Experience),
            reputation: f(MainBarRole::Reputation),
            honor: f(MainBarRole::Honor),
            azerite: f(MainBarRole::Azerite),
        }
    }

    /// Reads current flags from the main bars' providers.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingMainBar` if a role has no bar.
    pub fn collect(bars: &BarRegistry) -> Result<Self, CoreError> {
        for role in MainBarRole::all() {
            bars.require_main_bar(*role)?;
        }
        Ok(Self::from_fn(|role| {
            bars.main_bar(role)
                .is_some_and(|bar| bar.provider().should_be_visible())
        }))
    }

    /// Flag for one role.
    pub fn get(&self, role: MainBarRole) -> bool {
        match role {
            MainBarRole::Experience => self.experience,
            MainBarRole::Reputation => self.reputation,
            MainBarRole::Honor => self.honor,
            MainBarRole::Azerite => self.azerite,
        }
    }
}

/// Which role sits in which slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SlotAssignment {
    /// Primary slot, anchored to the container's right edge.
    pub right: Option<MainBarRole>,
    /// Secondary slot, anchored to the container's left edge.
    pub left: Option<MainBarRole>,
}

impl SlotAssignment {
    /// Number of filled slots.
    pub fn len(&self) -> usize {
        usize::from(self.right.is_some()) + usize::from(self.left.is_some())
    }

    /// Returns true if both slots are empty.
    pub fn is_empty(&self) -> bool {
        self.right.is_none()
    }

    /// Returns true if `role` occupies either slot.
    pub fn contains(&self, role: MainBarRole) -> bool {
        self.right == Some(role) || self.left == Some(role)
    }
}

impl fmt::Display for SlotAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |slot: Option<MainBarRole>| slot.map_or("none", MainBarRole::display_name);
        write!(f, "right={} left={}", name(self.right), name(self.left))
    }
}

/// Resolves slots from visibility flags.
///
/// Walks roles in priority order: the first visible role takes the right
/// slot, the next visible one the left slot.
pub fn resolve_slots(flags: &VisibilityFlags) -> SlotAssignment {
    let mut visible = MainBarRole::by_priority()
        .iter()
        .copied()
        .filter(|role| flags.get(*role));

    let right = visible.next();
    let left = visible.next();
    SlotAssignment { right, left }
}

// ============================================================================
// Layout
// ============================================================================

/// Placement of one slotted bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotLayout {
    /// Role placed.
    pub role: MainBarRole,
    /// Bar width.
    pub width: f32,
    /// Bar anchor inside the container.
    pub point: FramePoint,
    /// Track fill direction.
    pub fill: FillDirection,
    /// Text anchor relative to the bar.
    pub text_point: FramePoint,
}

/// Placement of both slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutPlan {
    /// Right slot placement.
    pub right: Option<SlotLayout>,
    /// Left slot placement.
    pub left: Option<SlotLayout>,
}

/// Text anchor for a bar filling in `fill` direction.
///
/// Text sits at the edge the track grows from, so it flips with the fill.
fn text_point(bar_name: &str, fill: FillDirection, settings: &BarSettings) -> FramePoint {
    match fill {
        FillDirection::Forward => FramePoint::same(AnchorPoint::Left, bar_name)
            .offset(settings.text_offset_x, settings.text_offset_y),
        FillDirection::Reversed => FramePoint::same(AnchorPoint::Right, bar_name)
            .offset(-settings.text_offset_x, settings.text_offset_y),
    }
}

/// Lays out an assignment.
///
/// A lone right bar spans the container. Two bars split it evenly minus the
/// spacing, the left one filling in reverse so both grow toward the center.
pub fn plan_layout(slots: &SlotAssignment, settings: &BarSettings) -> LayoutPlan {
    let Some(right) = slots.right else {
        return LayoutPlan::default();
    };

    let width = if slots.left.is_some() {
        settings.split_width()
    } else {
        settings.width
    };

    let right_layout = SlotLayout {
        role: right,
        width,
        point: FramePoint::same(AnchorPoint::Right, CONTAINER_NAME),
        fill: FillDirection::Forward,
        text_point: text_point(right.bar_name(), FillDirection::Forward, settings),
    };

    let left_layout = slots.left.map(|left| SlotLayout {
        role: left,
        width,
        point: FramePoint::same(AnchorPoint::Left, CONTAINER_NAME),
        fill: FillDirection::Reversed,
        text_point: text_point(left.bar_name(), FillDirection::Reversed, settings),
    });

    LayoutPlan {
        right: Some(right_layout),
        left: left_layout,
    }
}

// ============================================================================
// Arbiter
// ============================================================================

/// Runs arbitration and applies the result to the main bars.
#[derive(Debug, Default)]
pub struct MainBarArbiter {
    last_flags: Option<VisibilityFlags>,
    last_slots: Option<SlotAssignment>,
}

impl MainBarArbiter {
    /// Creates an arbiter that has not run yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags seen by the most recent run.
    pub fn last_flags(&self) -> Option<VisibilityFlags> {
        self.last_flags
    }

    /// Slots chosen by the most recent run.
    pub fn last_slots(&self) -> Option<SlotAssignment> {
        self.last_slots
    }

    /// Re-evaluates which main bars are shown and lays them out.
    ///
    /// Every main bar is hidden first, then the chosen bars are placed,
    /// shown and refreshed with `event`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingMainBar` if the main bars were not created.
    pub fn update_main_bar_visibility(
        &mut self,
        bars: &mut BarRegistry,
        settings: &BarSettings,
        event: &GameEvent,
    ) -> Result<SlotAssignment, CoreError> {
        let flags = VisibilityFlags::collect(bars)?;
        let slots = resolve_slots(&flags);
        let plan = plan_layout(&slots, settings);

        for role in MainBarRole::all() {
            if let Some(bar) = bars.main_bar_mut(*role) {
                bar.hide();
            }
        }

        for layout in [&plan.right, &plan.left].into_iter().flatten() {
            let bar = bars
                .main_bar_mut(layout.role)
                .ok_or_else(|| CoreError::MissingMainBar(layout.role.bar_name().to_string()))?;
            bar.set_point(layout.point.clone());
            bar.set_fill_direction(layout.fill);
            bar.set_width(layout.width);
            bar.set_text_point(layout.text_point.clone());
            bar.show();
            bar.update_bar(event);
        }

        debug!(event = %event.name, ?flags, slots = %slots, "Arbitrated main bars");
        if self.last_slots != Some(slots) {
            info!(slots = %slots, "Main bar slots changed");
        }

        self.last_flags = Some(flags);
        self.last_slots = Some(slots);
        Ok(slots)
    }

    /// Returns true if the providers' visibility moved since the last run.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingMainBar` if the main bars were not created.
    pub fn visibility_changed(&self, bars: &BarRegistry) -> Result<bool, CoreError> {
        let flags = VisibilityFlags::collect(bars)?;
        Ok(self.last_flags != Some(flags))
    }
}
