// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `HudBars` Bars
//!
//! Bar composition and main bar arbitration.
//!
//! This crate provides:
//!
//! - **Bar**: A progress widget delegating to one data provider
//! - **BarRegistry**: Bars and providers by name, plus the main bar set
//! - **MainBarArbiter**: Picks up to two main bars and lays them out
//! - **dispatch**: Pure event routing into [`Action`]s
//! - **StatusBars**: Ties it together behind one event entry point
//!
//! ## Usage
//!
//! ```ignore
//! use hudbars_bars::{RecordingHost, StatusBars};
//! use hudbars_core::{BarSettings, GameClient, GameEvent, PlayerSnapshot};
//! use std::sync::Arc;
//!
//! let client: Arc<dyn GameClient> = Arc::new(PlayerSnapshot::default());
//! let mut bars = StatusBars::with_client(&client, BarSettings::default())?;
//! bars.handle_event(&GameEvent::new("PLAYER_ENTERING_WORLD"))?;
//!
//! let mut host = RecordingHost::new();
//! bars.render(&mut host);
//! ```

pub mod arbiter;
pub mod bar;
pub mod dispatch;
pub mod frame;
pub mod host;
pub mod registry;
pub mod status_bars;

pub use arbiter::{
    LayoutPlan, MainBarArbiter, SlotAssignment, SlotLayout, VisibilityFlags, plan_layout,
    resolve_slots,
};
pub use bar::{Bar, render_text};
pub use dispatch::{Action, route};
pub use frame::{BarFrame, CONTAINER_NAME, ContainerFrame, FramePoint, ROOT_FRAME};
pub use host::{RecordingHost, WidgetHost};
pub use registry::BarRegistry;
pub use status_bars::StatusBars;
