//! Providers command - list registered data providers.

use anyhow::Result;
use hudbars_core::{GameClient, PlayerSnapshot};
use hudbars_providers::{ProviderDescriptor, ProviderRegistry};
use std::sync::Arc;
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the providers command.
pub fn run(cli: &Cli) -> Result<()> {
    info!("Listing providers");

    let client: Arc<dyn GameClient> = Arc::new(PlayerSnapshot::default());
    let registry = ProviderRegistry::with_defaults(&client);
    let providers: Vec<&ProviderDescriptor> = registry
        .names()
        .iter()
        .filter_map(|name| registry.descriptor(name))
        .collect();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);

            println!("{}", formatter.format_providers_header());
            println!("{}", "─".repeat(70));

            for desc in &providers {
                println!("{}", formatter.format_provider_line(desc));
            }

            println!();
            println!(
                "Total: {} providers ({} main bars)",
                providers.len(),
                providers.iter().filter(|d| d.is_main()).count()
            );
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_providers(&providers)?);
        }
    }

    Ok(())
}
