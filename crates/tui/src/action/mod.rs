//! Action protocol for TUI event handling.
//!
//! This module defines the unified Action enum. Actions represent user
//! inputs, UI ticks and guided-tour timer firings; all of them are funneled
//! through one channel and handled one at a time by the main loop.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by `App::update`)
//! - Timer spawning (handled by `runtime::scheduler`)
//! - UI rendering (handled by the ui module)

pub mod variants;

pub use variants::Action;
