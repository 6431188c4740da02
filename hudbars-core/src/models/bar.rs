//! Bar value and visual primitives.
//!
//! This module contains the small value types every bar carries:
//! - [`BarValues`] - The `min/value/max` snapshot a provider fills in
//! - [`BarColor`] - RGB color with the dimmed background convention
//! - [`FillDirection`] - Which way the progress track grows
//! - [`AnchorPoint`] - Named attachment points on a frame

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

// ============================================================================
// Bar Values
// ============================================================================

/// Numeric snapshot of a bar's progress.
///
/// Holds `min <= value <= max` with `max > 0` once normalized. The default is
/// `0 / 0..1`, which renders as an empty bar with a well-defined percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarValues {
    /// Lower bound of the track.
    pub min: f64,
    /// Current position on the track.
    pub value: f64,
    /// Upper bound of the track.
    pub max: f64,
}

impl BarValues {
    /// Creates a normalized snapshot.
    pub fn new(min: f64, value: f64, max: f64) -> Self {
        let mut values = Self { min, value, max };
        values.normalize();
        values
    }

    /// Returns true if the snapshot satisfies `min <= value <= max` and `max > 0`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.value.is_finite()
            && self.max.is_finite()
            && self.max > 0.0
            && self.min <= self.value
            && self.value <= self.max
    }

    /// Repairs a snapshot that breaks the invariants.
    ///
    /// Non-finite numbers become zero, a non-positive `max` becomes 1, `min`
    /// is pulled below `max` and `value` is clamped into `[min, max]`.
    /// Returns true if anything had to change.
    pub fn normalize(&mut self) -> bool {
        if self.is_valid() {
            return false;
        }

        warn!(
            min = self.min,
            value = self.value,
            max = self.max,
            "Repairing bar values"
        );

        let finite = |n: f64| if n.is_finite() { n } else { 0.0 };
        self.min = finite(self.min);
        self.value = finite(self.value);
        self.max = finite(self.max);

        if self.max <= 0.0 {
            self.max = 1.0;
        }
        if self.min > self.max {
            self.min = 0.0_f64.min(self.max);
        }
        self.value = self.value.clamp(self.min, self.max);
        true
    }

    /// Returns `value / max * 100`, or 0 when `max` is not positive.
    pub fn percent(&self) -> f64 {
        if self.max > 0.0 && self.max.is_finite() && self.value.is_finite() {
            self.value / self.max * 100.0
        } else {
            0.0
        }
    }
}

impl Default for BarValues {
    fn default() -> Self {
        Self {
            min: 0.0,
            value: 0.0,
            max: 1.0,
        }
    }
}

// ============================================================================
// Colors
// ============================================================================

/// Multiplier applied to a bar's foreground color to get its background tint.
pub const BACKGROUND_TINT: f32 = 0.4;

/// RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarColor {
    /// Red component (0.0 - 1.0).
    pub r: f32,
    /// Green component (0.0 - 1.0).
    pub g: f32,
    /// Blue component (0.0 - 1.0).
    pub b: f32,
}

impl BarColor {
    /// Creates a new color, clamping each component.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Scales every component by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// The dimmed background tint for this foreground color.
    pub fn background(&self) -> Self {
        self.scaled(BACKGROUND_TINT)
    }

    /// Returns the color as a hex string (e.g. "#FF8000").
    pub fn to_hex(&self) -> String {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let byte = |c: f32| (c * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl Default for BarColor {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

// ============================================================================
// Fill Direction
// ============================================================================

/// Direction in which a bar's progress grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillDirection {
    /// Grows left to right.
    #[default]
    Forward,
    /// Grows right to left.
    Reversed,
}

impl FillDirection {
    /// Returns true for [`FillDirection::Reversed`].
    pub fn is_reversed(self) -> bool {
        self == FillDirection::Reversed
    }
}

impl fmt::Display for FillDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillDirection::Forward => write!(f, "forward"),
            FillDirection::Reversed => write!(f, "reversed"),
        }
    }
}

// ============================================================================
// Anchor Points
// ============================================================================

/// Named attachment points on a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnchorPoint {
    /// Top-left corner.
    TopLeft,
    /// Top edge center.
    Top,
    /// Top-right corner.
    TopRight,
    /// Left edge center.
    Left,
    /// Frame center.
    Center,
    /// Right edge center.
    Right,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge center.
    #[default]
    Bottom,
    /// Bottom-right corner.
    BottomRight,
}

impl AnchorPoint {
    /// The host toolkit's name for this point.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "TOPLEFT",
            Self::Top => "TOP",
            Self::TopRight => "TOPRIGHT",
            Self::Left => "LEFT",
            Self::Center => "CENTER",
            Self::Right => "RIGHT",
            Self::BottomLeft => "BOTTOMLEFT",
            Self::Bottom => "BOTTOM",
            Self::BottomRight => "BOTTOMRIGHT",
        }
    }
}

impl fmt::Display for AnchorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values_are_valid() {
        let values = BarValues::default();
        assert!(values.is_valid());
        assert_eq!(values.percent(), 0.0);
    }

    #[test]
    fn test_normalize_zero_max() {
        let mut values = BarValues { min: 0.0, value: 0.0, max: 0.0 };
        assert!(values.normalize());
        assert_eq!(values.max, 1.0);
        assert!(values.is_valid());
    }

    #[test]
    fn test_normalize_clamps_value() {
        let values = BarValues::new(10.0, 500.0, 200.0);
        assert_eq!(values.value, 200.0);

        let values = BarValues::new(10.0, 2.0, 200.0);
        assert_eq!(values.value, 10.0);
    }

    #[test]
    fn test_normalize_non_finite() {
        let values = BarValues::new(f64::NAN, f64::INFINITY, f64::NAN);
        assert!(values.is_valid());
        assert_eq!(values.max, 1.0);
    }

    #[test]
    fn test_percent_guarded() {
        let values = BarValues { min: 0.0, value: 5.0, max: 0.0 };
        assert_eq!(values.percent(), 0.0);
        assert_eq!(BarValues::new(0.0, 50.0, 200.0).percent(), 25.0);
    }

    #[test]
    fn test_background_tint() {
        let color = BarColor::new(1.0, 0.5, 0.0);
        let bg = color.background();
        assert!((bg.r - 0.4).abs() < f32::EPSILON);
        assert!((bg.g - 0.2).abs() < f32::EPSILON);
        assert_eq!(bg.b, 0.0);
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(BarColor::new(1.0, 0.5, 0.0).to_hex(), "#FF8000");
    }

    #[test]
    fn test_anchor_point_serde() {
        let json = serde_json::to_string(&AnchorPoint::BottomLeft).unwrap();
        assert_eq!(json, "\"BOTTOMLEFT\"");
        let parsed: AnchorPoint = serde_json::from_str("\"TOPRIGHT\"").unwrap();
        assert_eq!(parsed, AnchorPoint::TopRight);
    }
}
