//! Application state and rendering.
//!
//! This module contains the main application state, input handling,
//! and rendering logic for the TUI.
//!
//! The module is organized into submodules:
//! - `core`: Construction and read accessors
//! - `actions`: Action handling (state mutation)
//! - `input`: Keyboard translation into Actions
//! - `mouse`: Mouse translation into Actions
//! - `layout`: Screen regions shared by rendering and hit-testing
//! - `render`: Rendering logic

mod actions;
mod core;
mod input;
pub mod layout;
mod mouse;
mod render;

pub use layout::{
    AppLayout, BANNER_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, PHASE_BAR_HEIGHT, TIP_HEIGHT,
};

use ratatui::layout::Rect;
use roadmap_config::{ColorTheme, Theme};

use crate::tour::TourMachine;
use crate::ui::PhaseTransition;

/// Main application state.
///
/// Owned by the event loop and mutated only through [`App::update`].
pub struct App {
    pub machine: TourMachine,
    pub color_theme: ColorTheme,
    pub theme: Theme,
    /// Index into the currently visible topic rows.
    pub selected: usize,
    /// First visible line of the topic list.
    pub list_offset: usize,
    /// Running banner slide-in, if a phase change just happened.
    pub transition: Option<PhaseTransition>,
    /// Last rendered terminal area (for mouse hit-testing).
    pub last_area: Rect,
}
