//! Text output formatting with progress bars and colors.

use hudbars_bars::Action;
use hudbars_core::{BarSettings, MainBarRole};
use hudbars_providers::ProviderDescriptor;

use super::json::{BarOutput, LayoutOutput};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

// Progress bar characters
const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
    bar_width: usize,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            bar_width: 20,
        }
    }

    /// Set the progress bar width.
    #[cfg(test)]
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Formats the layout: slot summary, then one line per bar.
    pub fn format_layout(&self, layout: &LayoutOutput) -> String {
        let mut lines = Vec::new();

        let slot = |role: Option<MainBarRole>| role.map_or("none", MainBarRole::display_name);
        lines.push(format!(
            "{} {}  {} {}",
            self.bold("Right:"),
            slot(layout.right),
            self.bold("Left:"),
            slot(layout.left)
        ));
        lines.push(self.dim(&format!(
            "Container {}x{} at {} ({:+}, {:+})",
            layout.container.width,
            layout.container.height,
            layout.container.anchor,
            layout.container.x,
            layout.container.y
        )));
        lines.push("─".repeat(60));

        for bar in &layout.bars {
            lines.push(self.format_bar(bar));
        }

        lines.join("\n")
    }

    /// Formats a single bar line.
    pub fn format_bar(&self, bar: &BarOutput) -> String {
        let name = format!("{:<16}", bar.name);
        if !bar.shown {
            return format!("{} {}", self.dim(&name), self.dim("hidden"));
        }

        let placement = match bar.slot {
            Some(slot) => format!("[{slot}, {}, {}]", bar.width, bar.fill),
            None => format!("[{}]", bar.width),
        };

        format!(
            "{} {} {} {}",
            self.bold(&name),
            self.progress_bar(bar.percent),
            bar.text,
            self.dim(&placement)
        )
    }

    /// Formats the header line for a replayed step.
    pub fn format_step_header(&self, step: usize, event: &str, actions: &[Action]) -> String {
        let actions = if actions.is_empty() {
            self.dim("no actions")
        } else {
            actions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("{} {} -> {}", self.cyan(&format!("#{step}")), self.bold(event), actions)
    }

    /// Formats a progress bar.
    pub fn progress_bar(&self, percent: f64) -> String {
        let fraction = (percent / 100.0).clamp(0.0, 1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let filled = (fraction * self.bar_width as f64).round() as usize;
        let empty = self.bar_width.saturating_sub(filled);

        let bar = format!(
            "{}{}",
            BAR_FULL.to_string().repeat(filled),
            BAR_EMPTY.to_string().repeat(empty)
        );

        self.color_for_percent(percent, &bar)
    }

    /// Formats provider list header.
    pub fn format_providers_header(&self) -> String {
        format!(
            "{:<12} {:<16} {:<16} {}",
            self.bold("Provider"),
            self.bold("Name"),
            self.bold("Bar"),
            self.bold("Events")
        )
    }

    /// Formats a single provider line.
    pub fn format_provider_line(&self, desc: &ProviderDescriptor) -> String {
        let bar = desc.role.map_or("−", MainBarRole::bar_name);
        let events = if desc.events.is_empty() {
            self.dim("−")
        } else {
            desc.events.join(", ")
        };

        format!(
            "{:<12} {:<16} {:<16} {}",
            desc.name, desc.display_name, bar, events
        )
    }

    /// Formats the bar settings.
    pub fn format_settings(&self, settings: &BarSettings) -> String {
        let mut lines = vec![self.bold("Bar settings"), "─".repeat(40)];

        lines.push(format!(
            "Anchor:     {} to {} ({:+}, {:+})",
            settings.anchor_point, settings.relative_point, settings.x_offset, settings.y_offset
        ));
        lines.push(format!(
            "Size:       {} x {} (spacing {})",
            settings.width, settings.height, settings.spacing
        ));
        lines.push(format!(
            "Text:       {} decimals, {}",
            settings.text_precision,
            if settings.show_text {
                self.green("shown")
            } else {
                self.dim("hidden")
            }
        ));
        lines.push(format!("Texture:    {}", settings.texture));
        lines.push(format!("Font:       {}", settings.font));

        if !settings.colors.is_empty() {
            lines.push(String::new());
            lines.push(self.dim("Colors:"));
            for (bar, color) in &settings.colors {
                lines.push(format!("  {bar:<16} {}", color.to_hex()));
            }
        }

        lines.join("\n")
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn color_for_percent(&self, percent: f64, text: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        if percent < 50.0 {
            self.yellow(text)
        } else {
            self.green(text)
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_clamps() {
        let formatter = TextFormatter::new(false).with_bar_width(10);
        assert_eq!(formatter.progress_bar(150.0), "██████████");
        assert_eq!(formatter.progress_bar(-5.0), "░░░░░░░░░░");
    }

    #[test]
    fn test_color_for_percent() {
        let formatter = TextFormatter::new(true);
        assert!(formatter.color_for_percent(25.0, "x").contains(YELLOW));
        assert!(formatter.color_for_percent(75.0, "x").contains(GREEN));
    }

    #[test]
    fn test_no_color_is_plain() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.bold("Right:"), "Right:");
    }
}
