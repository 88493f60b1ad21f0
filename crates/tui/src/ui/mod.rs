//! UI rendering modules for the TUI.
//!
//! This module contains the roadmap-specific rendering helpers that are
//! separated from the main app state management.

pub mod animation;
pub mod outline;
pub mod roadmap;
pub mod theme;

pub use animation::PhaseTransition;
pub use roadmap::{TopicRow, visible_rows, wrap_text};
