//! Simulate command - replay a script of game events.

use anyhow::{Context, Result};
use clap::Args;
use hudbars_core::{GameClient, SharedClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use super::layout::setup;
use crate::output::{JsonFormatter, LayoutOutput, StepOutput, TextFormatter};
use crate::scenario::{load_script, load_state};
use crate::{Cli, OutputFormat};

/// Arguments for the simulate command.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Script file: a JSON list of steps.
    #[arg(long)]
    pub script: PathBuf,

    /// Starting game state file (JSON).
    #[arg(long, short)]
    pub state: Option<PathBuf>,

    /// Only show the layout after the last step.
    #[arg(long)]
    pub last: bool,
}

/// Runs the simulate command.
pub fn run(args: &SimulateArgs, cli: &Cli) -> Result<()> {
    let steps = load_script(&args.script)?;
    let shared = Arc::new(SharedClient::new(load_state(args.state.as_deref())?));
    let client: Arc<dyn GameClient> = shared.clone();

    let mut status = setup(cli, &client)?;
    let mut outputs = Vec::with_capacity(steps.len());

    for (index, step) in steps.iter().enumerate() {
        let number = index + 1;
        if step.state.is_some() {
            let next = step
                .apply_state(&shared.snapshot())
                .with_context(|| format!("Invalid state in step {number}"))?;
            shared.replace(next);
            debug!(step = number, "Applied state changes");
        }

        let event = step.to_event();
        let actions = status.handle_event(&event)?;
        info!(step = number, event = %event.name, actions = actions.len(), "Replayed step");

        outputs.push(StepOutput {
            step: number,
            event: event.name,
            actions,
            layout: LayoutOutput::from_status_bars(&status),
        });
    }

    if args.last && outputs.len() > 1 {
        outputs.drain(..outputs.len() - 1);
    }

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            for (i, output) in outputs.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!(
                    "{}",
                    formatter.format_step_header(output.step, &output.event, &output.actions)
                );
                println!("{}", formatter.format_layout(&output.layout));
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&outputs)?);
        }
    }

    Ok(())
}
