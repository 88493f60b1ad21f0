//! Configuration management for the BA roadmap TUI.
//!
//! This crate provides the theme and tour timing types together with a
//! loader that merges defaults, environment variables and CLI overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, RoadmapConfig, env_var_or_none};
pub use types::{ColorTheme, Theme, TourTimings};
