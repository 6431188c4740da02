// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! `HudBars` CLI - drive the status bars from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Lay out the main bars for a default character
//! hudbars
//!
//! # Lay out the bars for a saved game state
//! hudbars layout --state player.json
//!
//! # Replay an event script
//! hudbars simulate --script leveling.json --format json --pretty
//!
//! # List providers
//! hudbars providers
//!
//! # Change the container width
//! hudbars config set-width 640
//! ```

mod commands;
mod output;
mod scenario;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{config, layout, providers, simulate};

// ============================================================================
// CLI Definition
// ============================================================================

/// `HudBars` CLI - main bar arbitration for a game HUD.
#[derive(Parser)]
#[command(name = "hudbars")]
#[command(about = "Status bar layout and event replay for a game HUD")]
#[command(long_about = r"
HudBars arranges up to two of the four main progress bars
(experience, reputation, honor, azerite) under the action bars.

Examples:
  hudbars                          # Layout for a default character
  hudbars layout --state p.json    # Layout for a saved game state
  hudbars simulate --script s.json # Replay events step by step
  hudbars --format json            # JSON output
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'layout' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Settings file to use instead of the default location.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Settings file in effect.
    pub fn settings_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(hudbars_store::default_settings_path)
    }
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the main bar layout for a game state (default).
    #[command(visible_alias = "l")]
    Layout(layout::LayoutArgs),

    /// Replay a script of events and show the layout after each.
    #[command(visible_alias = "s")]
    Simulate(simulate::SimulateArgs),

    /// List registered data providers.
    #[command(visible_alias = "p")]
    Providers,

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Settings were rejected.
    InvalidConfig = 2,
    /// A state or script file did not parse.
    ParseError = 3,
}

impl ExitCode {
    fn for_error(error: &anyhow::Error) -> Self {
        if let Some(store) = error.downcast_ref::<hudbars_store::StoreError>() {
            if store.is_invalid_settings() {
                return ExitCode::InvalidConfig;
            }
        }
        if let Some(core) = error.downcast_ref::<hudbars_core::CoreError>() {
            if matches!(core, hudbars_core::CoreError::InvalidConfig(_)) {
                return ExitCode::InvalidConfig;
            }
        }
        if error.downcast_ref::<serde_json::Error>().is_some() {
            return ExitCode::ParseError;
        }
        ExitCode::Error
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("hudbars=debug,info")
    } else {
        EnvFilter::new("hudbars=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Layout(args)) => layout::run(args, &cli),
        Some(Commands::Simulate(args)) => simulate::run(args, &cli),
        Some(Commands::Providers) => providers::run(&cli),
        Some(Commands::Config(args)) => config::run(args, &cli),
        None => layout::run(&layout::LayoutArgs::default(), &cli),
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {e:#}");
            }
            ExitCode::for_error(&e)
        }
    };

    std::process::exit(code as i32);
}
