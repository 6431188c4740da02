//! Visual state handed to the host toolkit.
//!
//! Frames are plain data. The host renders them; nothing here talks to the
//! toolkit directly.

use hudbars_core::{AnchorPoint, BarColor, BarSettings, BarValues, FillDirection};
use serde::Serialize;

/// Name of the frame holding the main bars.
pub const CONTAINER_NAME: &str = "HudBarsContainer";

/// Name of the host's root frame.
pub const ROOT_FRAME: &str = "UIParent";

/// An anchor from one frame's point to another frame's point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FramePoint {
    /// Point on the anchored frame.
    pub point: AnchorPoint,
    /// Frame anchored to.
    pub relative_to: String,
    /// Point on the frame anchored to.
    pub relative_point: AnchorPoint,
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

impl FramePoint {
    /// Anchors `point` to the same point on `relative_to`.
    pub fn same(point: AnchorPoint, relative_to: &str) -> Self {
        Self {
            point,
            relative_to: relative_to.to_string(),
            relative_point: point,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Adds an offset.
    #[must_use]
    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Placement of the container holding the main bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerFrame {
    /// Container frame name.
    pub name: String,
    /// Anchor to the root frame.
    pub point: FramePoint,
    /// Container width.
    pub width: f32,
    /// Container height.
    pub height: f32,
}

impl ContainerFrame {
    /// Builds the container placement from settings.
    pub fn from_settings(settings: &BarSettings) -> Self {
        Self {
            name: CONTAINER_NAME.to_string(),
            point: FramePoint {
                point: settings.anchor_point,
                relative_to: ROOT_FRAME.to_string(),
                relative_point: settings.relative_point,
                x: settings.x_offset,
                y: settings.y_offset,
            },
            width: settings.width,
            height: settings.height,
        }
    }
}

/// Everything the host needs to draw one bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarFrame {
    /// Bar name.
    pub name: String,
    /// Whether the widget is shown.
    pub shown: bool,
    /// Widget width.
    pub width: f32,
    /// Widget height.
    pub height: f32,
    /// Widget anchor, if placed.
    pub point: Option<FramePoint>,
    /// Track fill direction.
    pub fill: FillDirection,
    /// Values applied to the track.
    pub track: BarValues,
    /// Foreground color.
    pub color: BarColor,
    /// Background tint.
    pub background: BarColor,
    /// Texture lookup key.
    pub texture: String,
    /// Font lookup key.
    pub font: String,
    /// Displayed text.
    pub text: String,
    /// Whether the text is drawn.
    pub text_shown: bool,
    /// Text anchor, relative to the bar itself.
    pub text_point: Option<FramePoint>,
}

impl BarFrame {
    /// A hidden, unplaced frame.
    pub fn new(name: &str) -> Self {
        let color = BarColor::default();
        Self {
            name: name.to_string(),
            shown: false,
            width: 0.0,
            height: 0.0,
            point: None,
            fill: FillDirection::Forward,
            track: BarValues::default(),
            color,
            background: color.background(),
            texture: String::new(),
            font: String::new(),
            text: String::new(),
            text_shown: true,
            text_point: None,
        }
    }
}
