//! A progress bar backed by one data provider.
//!
//! The bar owns its value snapshot and visual frame and delegates every
//! data question to its provider. Providers are shared; bars are not.

use hudbars_core::event::PLAYER_ENTERING_WORLD;
use hudbars_core::{
    BarColor, BarSettings, BarValues, DataProvider, FillDirection, GameEvent, TooltipLines,
};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::frame::{BarFrame, FramePoint};

// ============================================================================
// Text
// ============================================================================

/// Renders bar text.
///
/// With percent text on this is `"<percent>% <data text>"`, the percentage
/// printed with `precision` decimals. Otherwise it is the data text alone.
pub fn render_text(values: &BarValues, data_text: &str, show_percent: bool, precision: u8) -> String {
    if !show_percent {
        return data_text.to_string();
    }

    let percent = format!("{:.*}%", usize::from(precision), values.percent());
    if data_text.is_empty() {
        percent
    } else {
        format!("{percent} {data_text}")
    }
}

// ============================================================================
// Bar
// ============================================================================

/// A progress widget composed with one provider.
pub struct Bar {
    name: String,
    provider: Arc<dyn DataProvider>,
    values: BarValues,
    events: BTreeSet<String>,
    text_precision: u8,
    frame: BarFrame,
}

impl Bar {
    /// Creates a hidden bar delegating to `provider`.
    pub fn new(name: impl Into<String>, provider: Arc<dyn DataProvider>) -> Self {
        let name = name.into();
        let frame = BarFrame::new(&name);
        let mut bar = Self {
            name,
            provider,
            values: BarValues::default(),
            events: BTreeSet::new(),
            text_precision: BarSettings::default().text_precision,
            frame,
        };
        bar.register_events();
        bar.update_text();
        bar
    }

    /// Bar name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The provider this bar delegates to.
    pub fn provider(&self) -> &Arc<dyn DataProvider> {
        &self.provider
    }

    /// Current value snapshot.
    pub fn values(&self) -> &BarValues {
        &self.values
    }

    /// Current visual state.
    pub fn frame(&self) -> &BarFrame {
        &self.frame
    }

    /// Displayed text.
    pub fn text(&self) -> &str {
        &self.frame.text
    }

    /// Returns true if the widget is shown.
    pub fn is_shown(&self) -> bool {
        self.frame.shown
    }

    /// Events this bar listens to.
    pub fn events(&self) -> &BTreeSet<String> {
        &self.events
    }

    /// Returns true if this bar listens to `event`.
    pub fn listens_to(&self, event: &GameEvent) -> bool {
        self.events.contains(&event.name)
    }

    /// Subscribes to the entering-world baseline plus the provider's events.
    ///
    /// There is no unsubscribe; bars live as long as the session.
    pub fn register_events(&mut self) -> &BTreeSet<String> {
        self.events.insert(PLAYER_ENTERING_WORLD.to_string());
        for event in self.provider.events() {
            self.events.insert((*event).to_string());
        }
        debug!(bar = %self.name, events = self.events.len(), "Registered bar events");
        &self.events
    }

    /// Pulls fresh values from the provider.
    ///
    /// Does nothing while the bar is hidden so providers are never queried
    /// for data nobody sees. Returns true if the provider ran.
    pub fn update_bar(&mut self, event: &GameEvent) -> bool {
        if !self.frame.shown {
            debug!(bar = %self.name, event = %event.name, "Skipping update for hidden bar");
            return false;
        }

        self.provider.update(event, &mut self.values);
        self.values.normalize();
        self.frame.track = self.values;
        self.update_text();

        debug!(
            bar = %self.name,
            value = self.values.value,
            max = self.values.max,
            "Updated bar"
        );
        true
    }

    /// Recomputes the displayed text from the value snapshot.
    pub fn update_text(&mut self) {
        self.frame.text = render_text(
            &self.values,
            &self.provider.data_text(),
            self.provider.should_display_percent_text(),
            self.text_precision,
        );
    }

    /// Shows or hides the widget strictly per the provider.
    ///
    /// For standalone bars; main bars are placed by the arbiter.
    pub fn update_visibility(&mut self) -> bool {
        let visible = self.provider.should_be_visible();
        if visible != self.frame.shown {
            debug!(bar = %self.name, visible, "Bar visibility changed");
        }
        if visible {
            self.show();
        } else {
            self.hide();
        }
        visible
    }

    /// Sets the foreground color and its dimmed background.
    pub fn set_bar_color(&mut self, r: f32, g: f32, b: f32) {
        let color = BarColor::new(r, g, b);
        self.frame.color = color;
        self.frame.background = color.background();
    }

    /// Tooltip content, if the provider offers one.
    pub fn tooltip(&self) -> Option<TooltipLines> {
        if !self.provider.has_tooltip() {
            return None;
        }
        let mut tooltip = TooltipLines::new();
        self.provider.set_tooltip_info(&mut tooltip);
        Some(tooltip)
    }

    /// Applies a settings snapshot: size, color, texture, font and text options.
    pub fn apply_settings(&mut self, settings: &BarSettings) {
        let color = settings.color_for(&self.name);
        self.set_bar_color(color.r, color.g, color.b);
        self.frame.height = settings.height;
        self.frame.texture.clone_from(&settings.texture);
        self.frame.font.clone_from(&settings.font);
        self.frame.text_shown = settings.show_text;
        self.text_precision = settings.text_precision;
        self.update_text();
    }

    // ------------------------------------------------------------------------
    // Layout primitives
    // ------------------------------------------------------------------------

    /// Shows the widget.
    pub fn show(&mut self) {
        self.frame.shown = true;
    }

    /// Hides the widget.
    pub fn hide(&mut self) {
        self.frame.shown = false;
    }

    /// Sets the widget width.
    pub fn set_width(&mut self, width: f32) {
        self.frame.width = width;
    }

    /// Anchors the widget.
    pub fn set_point(&mut self, point: FramePoint) {
        self.frame.point = Some(point);
    }

    /// Sets the track fill direction.
    pub fn set_fill_direction(&mut self, fill: FillDirection) {
        self.frame.fill = fill;
    }

    /// Anchors the text relative to the bar itself.
    pub fn set_text_point(&mut self, point: FramePoint) {
        self.frame.text_point = Some(point);
    }
}

impl fmt::Debug for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bar")
            .field("name", &self.name)
            .field("provider", &self.provider.name())
            .field("values", &self.values)
            .field("shown", &self.frame.shown)
            .finish_non_exhaustive()
    }
}
