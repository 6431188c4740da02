//! Layout settings snapshot.
//!
//! [`BarSettings`] is the read-only view of configuration the bars consume on
//! each refresh. Persisting it is the store's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::bar::{AnchorPoint, BarColor};
use super::role::MainBarRole;
use crate::error::CoreError;

/// Highest supported number of decimals in percent text.
pub const MAX_TEXT_PRECISION: u8 = 6;

/// Layout and appearance of the main bar container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSettings {
    /// Point on the container that is anchored.
    pub anchor_point: AnchorPoint,
    /// Point on the parent the container is anchored to.
    pub relative_point: AnchorPoint,
    /// Horizontal offset of the container.
    pub x_offset: f32,
    /// Vertical offset of the container.
    pub y_offset: f32,
    /// Total container width.
    pub width: f32,
    /// Bar height.
    pub height: f32,
    /// Gap between the two bars when both slots are filled.
    pub spacing: f32,
    /// Horizontal text inset from the bar's leading edge.
    pub text_offset_x: f32,
    /// Vertical text offset.
    pub text_offset_y: f32,
    /// Decimals shown in percent text.
    pub text_precision: u8,
    /// Whether bar text is shown at all.
    pub show_text: bool,
    /// Texture lookup key for the bar track.
    pub texture: String,
    /// Font lookup key for bar text.
    pub font: String,
    /// Foreground colors keyed by bar name.
    pub colors: BTreeMap<String, BarColor>,
}

impl Default for BarSettings {
    fn default() -> Self {
        let colors = MainBarRole::all()
            .iter()
            .map(|role| (role.bar_name().to_string(), role.default_color()))
            .collect();

        Self {
            anchor_point: AnchorPoint::Bottom,
            relative_point: AnchorPoint::Bottom,
            x_offset: 0.0,
            y_offset: 2.0,
            width: 500.0,
            height: 12.0,
            spacing: 4.0,
            text_offset_x: 4.0,
            text_offset_y: 0.0,
            text_precision: 1,
            show_text: true,
            texture: "Blizzard".to_string(),
            font: "Friz Quadrata TT".to_string(),
            colors,
        }
    }
}

impl BarSettings {
    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` for non-positive sizes, negative
    /// spacing, spacing that leaves no room for two bars, or a precision
    /// above [`MAX_TEXT_PRECISION`].
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "spacing must not be negative, got {}",
                self.spacing
            )));
        }
        if self.spacing >= self.width {
            return Err(CoreError::InvalidConfig(format!(
                "spacing {} leaves no room in width {}",
                self.spacing, self.width
            )));
        }
        if self.text_precision > MAX_TEXT_PRECISION {
            return Err(CoreError::InvalidConfig(format!(
                "text precision must be at most {MAX_TEXT_PRECISION}, got {}",
                self.text_precision
            )));
        }
        Ok(())
    }

    /// Width of each bar when both slots are filled.
    pub fn split_width(&self) -> f32 {
        (self.width - self.spacing) / 2.0
    }

    /// Foreground color configured for a bar, or white.
    pub fn color_for(&self, bar_name: &str) -> BarColor {
        self.colors
            .get(bar_name)
            .copied()
            .or_else(|| MainBarRole::from_name(bar_name).map(MainBarRole::default_color))
            .unwrap_or_default()
    }
}
