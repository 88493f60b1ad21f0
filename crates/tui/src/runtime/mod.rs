//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Configuration loading from CLI + environment
//! - Cancelable guided-tour timers (TourScheduler)
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `ba_roadmap::app` and `ba_roadmap::ui`).
//! - Tour semantics (see `ba_roadmap::tour`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - Timers run in separate tokio tasks so the UI loop never blocks.

pub mod config;
pub mod scheduler;
pub mod terminal;
