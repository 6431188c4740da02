// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `HudBars` Core
//!
//! Core types, models, and traits for the `HudBars` status bars.
//!
//! This crate provides the foundational abstractions used across all other
//! `HudBars` crates, including:
//!
//! - Domain models (bar values, roles, layout settings, events)
//! - Error types
//! - The provider capability trait and the game-state query trait
//!
//! ## Key Types
//!
//! ### Bars
//! - [`BarValues`] - `min/value/max` snapshot with its invariants
//! - [`BarColor`] - Foreground color and background tint
//! - [`FillDirection`] / [`AnchorPoint`] - Layout primitives
//! - [`MainBarRole`] - Experience, Reputation, Honor, Azerite
//!
//! ### Configuration
//! - [`BarSettings`] - Read-only layout snapshot
//!
//! ### Providers
//! - [`DataProvider`] - Visibility, update, text and tooltip capabilities
//! - [`GameClient`] - Queries providers run against the game
//! - [`PlayerSnapshot`] / [`SharedClient`] - In-memory game state

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Bars
    AnchorPoint,
    BACKGROUND_TINT,
    BarColor,
    BarValues,
    FillDirection,
    MainBarRole,
    // Configuration
    BarSettings,
    MAX_TEXT_PRECISION,
    // Events & tooltips
    GameEvent,
    TooltipLine,
    TooltipLines,
    // Game state
    AzeriteProgress,
    FactionStanding,
    HonorProgress,
    PlayerSnapshot,
    SharedClient,
};
pub use models::event;

// Re-export traits
pub use traits::{BasicProvider, DataProvider, GameClient, NO_DATA_TEXT};
