//! Output formatting for CLI.

mod json;
mod text;

pub use json::{JsonFormatter, LayoutOutput, StepOutput};
pub use text::TextFormatter;
#[cfg(test)]
mod tests;
