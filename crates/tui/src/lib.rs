//! BA Roadmap Library
//!
//! This library provides the roadmap content, the disclosure and guided-tour
//! state machine, and the UI components for the business analyst roadmap
//! terminal application.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use ba_roadmap::content::{ContentStore, Phase};
//! use ba_roadmap::tour::TourMachine;
//! use roadmap_config::TourTimings;
//!
//! let content = Arc::new(ContentStore::builtin().unwrap());
//! let mut machine = TourMachine::new(content, TourTimings::default());
//! machine.toggle("sql");
//! assert!(machine.is_expanded("sql"));
//! assert!(machine.content().phase(Phase::Intermediate).topics.len() == 4);
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod content;
pub mod runtime;
pub mod tour;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use content::{ContentError, ContentStore, Phase, Topic};
pub use tour::{TimerCommand, TourMachine, TourStatus};
