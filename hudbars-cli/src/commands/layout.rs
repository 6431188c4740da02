//! Layout command - show where the main bars end up.

use anyhow::Result;
use clap::Args;
use hudbars_bars::StatusBars;
use hudbars_core::event::PLAYER_ENTERING_WORLD;
use hudbars_core::{GameClient, GameEvent};
use hudbars_store::SettingsStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::output::{JsonFormatter, LayoutOutput, TextFormatter};
use crate::scenario::load_state;
use crate::{Cli, OutputFormat};

/// Arguments for the layout command.
#[derive(Args, Debug, Default)]
pub struct LayoutArgs {
    /// Game state file (JSON). Defaults to a level 1 character.
    #[arg(long, short)]
    pub state: Option<PathBuf>,
}

/// Runs the layout command.
pub fn run(args: &LayoutArgs, cli: &Cli) -> Result<()> {
    let state = load_state(args.state.as_deref())?;
    let client: Arc<dyn GameClient> = Arc::new(state);

    let mut status = setup(cli, &client)?;
    status.handle_event(&GameEvent::new(PLAYER_ENTERING_WORLD))?;

    info!(slots = ?status.slots(), "Layout resolved");
    print_layout(cli, &status)
}

/// Builds the status bars with the configured settings.
pub(crate) fn setup(cli: &Cli, client: &Arc<dyn GameClient>) -> Result<StatusBars> {
    let store = SettingsStore::load(cli.settings_path())?;
    let status = StatusBars::with_client(client, store.bar_settings())?;
    Ok(status)
}

/// Prints the current layout in the selected format.
pub(crate) fn print_layout(cli: &Cli, status: &StatusBars) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_layout(&LayoutOutput::from_status_bars(status)));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_layout(status)?);
        }
    }
    Ok(())
}
