//! Config command - manage configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use hudbars_store::{SettingsStore, default_config_dir};
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Write a settings file with the defaults.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Set the total width of the main bar container.
    SetWidth {
        /// Width in UI units.
        width: f32,
    },

    /// Set the number of decimals in the percent text.
    SetPrecision {
        /// Decimals, 0 to 6.
        precision: u8,
    },

    /// Reset to defaults.
    Reset,
}

/// Runs the config command.
pub fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli),
        ConfigAction::Path => show_paths(cli),
        ConfigAction::Init { force } => init_config(*force, cli),
        ConfigAction::SetWidth { width } => set_width(*width, cli),
        ConfigAction::SetPrecision { precision } => set_precision(*precision, cli),
        ConfigAction::Reset => reset_config(cli),
    }
}

fn show_config(cli: &Cli) -> Result<()> {
    let store = SettingsStore::load(cli.settings_path())?;
    let settings = store.get();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_settings(&settings.bars));
            println!();
            println!("Log level: {}", settings.log_level);
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&settings)?);
        }
    }

    Ok(())
}

fn show_paths(cli: &Cli) -> Result<()> {
    let config_dir = default_config_dir();
    let settings_path = cli.settings_path();

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!("Config dir:    {}", config_dir.display());
            println!("Settings file: {}", settings_path.display());
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_dir": config_dir.display().to_string(),
                "settings_file": settings_path.display().to_string(),
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}

fn init_config(force: bool, cli: &Cli) -> Result<()> {
    let path = cli.settings_path();
    if path.exists() && !force {
        anyhow::bail!(
            "Settings file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    SettingsStore::new(path.clone()).save()?;
    info!(path = %path.display(), "Settings initialized");
    println!("Wrote default settings to {}", path.display());

    Ok(())
}

fn set_width(width: f32, cli: &Cli) -> Result<()> {
    let store = SettingsStore::load(cli.settings_path())?;
    store.set_width(width)?;
    store.save()?;

    info!(width, "Bar width updated");
    println!("Bar width set to: {width}");

    Ok(())
}

fn set_precision(precision: u8, cli: &Cli) -> Result<()> {
    let store = SettingsStore::load(cli.settings_path())?;
    store.set_text_precision(precision)?;
    store.save()?;

    info!(precision, "Text precision updated");
    println!("Text precision set to: {precision}");

    Ok(())
}

fn reset_config(cli: &Cli) -> Result<()> {
    let path = cli.settings_path();

    if path.exists() {
        std::fs::remove_file(&path)?;
        info!(path = %path.display(), "Settings reset");
        println!("Configuration reset to defaults");
    } else {
        println!("No configuration file to reset");
    }

    Ok(())
}
