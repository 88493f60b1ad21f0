//! Configuration type definitions for the roadmap TUI.
//!
//! Responsibilities:
//! - Define the color theme types (`ColorTheme`, `Theme`).
//! - Define the guided tour timing type (`TourTimings`).
//!
//! Does NOT handle:
//! - Loading configuration from the environment (see `loader` module).
//! - Rendering (see the TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the selectable representation; `Theme` is the runtime palette.

mod theme;
mod timings;

pub use theme::{ColorTheme, Theme};
pub use timings::TourTimings;
