//! JSON output formatting.

use anyhow::Result;
use hudbars_bars::{Action, StatusBars};
use hudbars_core::{FillDirection, MainBarRole};
use hudbars_providers::ProviderDescriptor;
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for the whole layout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOutput {
    pub container: ContainerOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<MainBarRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<MainBarRole>,
    pub bars: Vec<BarOutput>,
}

/// Container placement.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOutput {
    pub anchor: String,
    pub relative_point: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A single bar.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarOutput {
    pub name: String,
    pub main: bool,
    pub shown: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<&'static str>,
    pub width: f32,
    pub fill: FillDirection,
    pub min: f64,
    pub value: f64,
    pub max: f64,
    pub percent: f64,
    pub text: String,
    pub color: String,
}

/// One replayed script step.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutput {
    pub step: usize,
    pub event: String,
    pub actions: Vec<Action>,
    pub layout: LayoutOutput,
}

/// Provider info output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfoOutput {
    pub name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<MainBarRole>,
    pub bar: Option<String>,
    pub events: Vec<String>,
    pub color: String,
    pub description: String,
}

// ============================================================================
// Conversions
// ============================================================================

impl LayoutOutput {
    /// Captures the current state of every bar.
    pub fn from_status_bars(status: &StatusBars) -> Self {
        let slots = status.slots().unwrap_or_default();
        let container = status.container();

        let bars = status
            .bars()
            .bars()
            .map(|bar| {
                let role = MainBarRole::from_name(bar.name());
                let slot = match role {
                    Some(role) if slots.right == Some(role) => Some("right"),
                    Some(role) if slots.left == Some(role) => Some("left"),
                    _ => None,
                };
                let frame = bar.frame();
                let values = bar.values();

                BarOutput {
                    name: bar.name().to_string(),
                    main: status.bars().is_main(bar.name()),
                    shown: frame.shown,
                    slot,
                    width: frame.width,
                    fill: frame.fill,
                    min: values.min,
                    value: values.value,
                    max: values.max,
                    percent: values.percent(),
                    text: bar.text().to_string(),
                    color: frame.color.to_hex(),
                }
            })
            .collect();

        Self {
            container: ContainerOutput {
                anchor: container.point.point.as_str().to_string(),
                relative_point: container.point.relative_point.as_str().to_string(),
                x: container.point.x,
                y: container.point.y,
                width: container.width,
                height: container.height,
            },
            right: slots.right,
            left: slots.left,
            bars,
        }
    }
}

impl From<&ProviderDescriptor> for ProviderInfoOutput {
    fn from(desc: &ProviderDescriptor) -> Self {
        Self {
            name: desc.name.to_string(),
            display_name: desc.display_name.to_string(),
            role: desc.role,
            bar: desc.role.map(|r| r.bar_name().to_string()),
            events: desc.events.iter().map(ToString::to_string).collect(),
            color: desc.color.to_hex(),
            description: desc.description.to_string(),
        }
    }
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats the current layout.
    pub fn format_layout(&self, status: &StatusBars) -> Result<String> {
        self.format(&LayoutOutput::from_status_bars(status))
    }

    /// Formats provider descriptors.
    pub fn format_providers(&self, providers: &[&ProviderDescriptor]) -> Result<String> {
        let outputs: Vec<ProviderInfoOutput> = providers.iter().map(|d| (*d).into()).collect();
        self.format(&outputs)
    }
}
