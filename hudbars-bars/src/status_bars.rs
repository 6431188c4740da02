//! The status bar module as a whole.
//!
//! [`StatusBars`] owns the bar registry, the arbiter and the current settings
//! snapshot. The host calls [`StatusBars::handle_event`] from its event
//! dispatcher and [`StatusBars::render`] to draw.

use hudbars_core::event::STATUS_TRACKING_CHANGED;
use hudbars_core::{BarSettings, CoreError, GameClient, GameEvent};
use hudbars_providers::ProviderRegistry;
use std::sync::Arc;
use tracing::{debug, info};

use crate::arbiter::{MainBarArbiter, SlotAssignment};
use crate::bar::Bar;
use crate::dispatch::{Action, route};
use crate::frame::ContainerFrame;
use crate::host::WidgetHost;
use crate::registry::BarRegistry;

/// Main bars, standalone bars and their arbitration.
#[derive(Debug)]
pub struct StatusBars {
    bars: BarRegistry,
    arbiter: MainBarArbiter,
    settings: BarSettings,
    container: ContainerFrame,
}

impl StatusBars {
    /// Sets up the main bars over `providers`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` for invalid settings and
    /// `CoreError::ProviderNotFound` if a main bar provider is missing.
    pub fn new(providers: ProviderRegistry, settings: BarSettings) -> Result<Self, CoreError> {
        settings.validate()?;

        let mut bars = BarRegistry::new(providers);
        bars.create_main_bars()?;
        for bar in bars.bars_mut() {
            bar.apply_settings(&settings);
        }

        info!(bars = bars.names().len(), "Status bars ready");
        Ok(Self {
            bars,
            arbiter: MainBarArbiter::new(),
            container: ContainerFrame::from_settings(&settings),
            settings,
        })
    }

    /// Sets up the main bars with the default providers over `client`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` for invalid settings.
    pub fn with_client(client: &Arc<dyn GameClient>, settings: BarSettings) -> Result<Self, CoreError> {
        Self::new(ProviderRegistry::with_defaults(client), settings)
    }

    /// The bar registry.
    pub fn bars(&self) -> &BarRegistry {
        &self.bars
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> &BarSettings {
        &self.settings
    }

    /// Current container placement.
    pub fn container(&self) -> &ContainerFrame {
        &self.container
    }

    /// Slots chosen by the most recent arbitration.
    pub fn slots(&self) -> Option<SlotAssignment> {
        self.arbiter.last_slots()
    }

    /// Adds a standalone bar composed with `provider_name`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ProviderNotFound` if the provider is not registered
    /// and `CoreError::DuplicateBar` if the name is taken, main bars included.
    pub fn create_bar(&mut self, name: &str, provider_name: &str) -> Result<&Bar, CoreError> {
        let bar = self.bars.create_bar(name, provider_name)?;
        bar.apply_settings(&self.settings);
        bar.set_width(self.settings.width);
        Ok(&*bar)
    }

    /// Handles one host event and returns the actions taken.
    ///
    /// If the event does not force arbitration but a main bar provider's
    /// visibility moved anyway, arbitration runs too and is reported. Before
    /// the first arbitration any player event lays the bars out. Events for
    /// other units are ignored and change nothing.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingMainBar` if main bars are missing.
    pub fn handle_event(&mut self, event: &GameEvent) -> Result<Vec<Action>, CoreError> {
        if !event.concerns_player() {
            debug!(event = %event.name, unit = ?event.unit, "Ignoring event for another unit");
            return Ok(Vec::new());
        }

        let mut actions = route(event, &self.bars);
        debug!(event = %event.name, actions = actions.len(), "Handling event");

        for action in &actions {
            self.apply(action, event)?;
        }

        if !actions.contains(&Action::Arbitrate) && self.arbiter.visibility_changed(&self.bars)? {
            debug!(event = %event.name, "Provider visibility moved, re-arbitrating");
            self.apply(&Action::Arbitrate, event)?;
            actions.push(Action::Arbitrate);
        }

        Ok(actions)
    }

    /// Hook for the host's own status-tracking manager changing its bars.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingMainBar` if main bars are missing.
    pub fn on_status_tracking_changed(&mut self) -> Result<SlotAssignment, CoreError> {
        self.update_main_bar_visibility(&GameEvent::new(STATUS_TRACKING_CHANGED))
    }

    /// Re-runs main bar arbitration.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingMainBar` if main bars are missing.
    pub fn update_main_bar_visibility(&mut self, event: &GameEvent) -> Result<SlotAssignment, CoreError> {
        self.arbiter
            .update_main_bar_visibility(&mut self.bars, &self.settings, event)
    }

    /// Applies a new settings snapshot and lays everything out again.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` for invalid settings; the previous
    /// snapshot stays in effect.
    pub fn refresh(&mut self, settings: BarSettings) -> Result<SlotAssignment, CoreError> {
        settings.validate()?;
        info!(width = settings.width, height = settings.height, "Refreshing bar settings");

        self.container = ContainerFrame::from_settings(&settings);
        for bar in self.bars.bars_mut() {
            bar.apply_settings(&settings);
        }
        self.settings = settings;

        let standalone: Vec<String> = self
            .bars
            .names()
            .iter()
            .filter(|name| !self.bars.is_main(name))
            .cloned()
            .collect();
        for name in standalone {
            if let Some(bar) = self.bars.bar_mut(&name) {
                bar.set_width(self.settings.width);
            }
        }

        self.update_main_bar_visibility(&GameEvent::new(STATUS_TRACKING_CHANGED))
    }

    /// Pushes the container and every bar frame to the host.
    pub fn render(&self, host: &mut dyn WidgetHost) {
        host.sync_container(&self.container);
        for bar in self.bars.bars() {
            host.sync_bar(bar.frame());
        }
    }

    fn apply(&mut self, action: &Action, event: &GameEvent) -> Result<(), CoreError> {
        match action {
            Action::UpdateVisibility(name) => {
                if let Some(bar) = self.bars.bar_mut(name) {
                    bar.update_visibility();
                }
            }
            Action::UpdateBar(name) => {
                if let Some(bar) = self.bars.bar_mut(name) {
                    bar.update_bar(event);
                }
            }
            Action::Arbitrate => {
                self.update_main_bar_visibility(event)?;
            }
        }
        Ok(())
    }
}
