//! Tooltip content collected from providers.

use serde::{Deserialize, Serialize};

/// One tooltip row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TooltipLine {
    /// A single left-aligned line.
    Single {
        /// Line text.
        text: String,
    },
    /// A left/right pair.
    Double {
        /// Left text.
        left: String,
        /// Right text.
        right: String,
    },
}

/// Lines a provider writes into a bar's tooltip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipLines {
    lines: Vec<TooltipLine>,
}

impl TooltipLines {
    /// Creates an empty tooltip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single line.
    pub fn add_line(&mut self, text: impl Into<String>) {
        self.lines.push(TooltipLine::Single { text: text.into() });
    }

    /// Appends a left/right pair.
    pub fn add_double_line(&mut self, left: impl Into<String>, right: impl Into<String>) {
        self.lines.push(TooltipLine::Double {
            left: left.into(),
            right: right.into(),
        });
    }

    /// Returns the collected lines.
    pub fn lines(&self) -> &[TooltipLine] {
        &self.lines
    }

    /// Returns true if nothing was added.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders each line as plain text.
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| match line {
                TooltipLine::Single { text } => text.clone(),
                TooltipLine::Double { left, right } => format!("{left}: {right}"),
            })
            .collect()
    }
}
