//! Action enum definitions for the TUI event system.
//!
//! # Action Categories
//!
//! - **System**: Application lifecycle (Quit, Resize, Tick)
//! - **Input**: Raw keyboard and mouse events awaiting translation
//! - **Navigation**: Selection movement within the topic list
//! - **Roadmap**: Phase selection, topic toggling, tour control
//! - **Timers**: Guided tour steps coming due
//! - **Presentation**: Theme switching

use crossterm::event::{KeyEvent, MouseEvent};

use crate::content::Phase;
use crate::tour::ScheduledStep;

/// Unified action type for the TUI event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // System
    /// Quit the application.
    Quit,
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic UI tick for animations.
    Tick,

    // Input
    /// Raw keyboard input.
    Input(KeyEvent),
    /// Raw mouse input.
    Mouse(MouseEvent),

    // Navigation
    /// Move the selection to the next visible row.
    SelectNext,
    /// Move the selection to the previous visible row.
    SelectPrevious,

    // Roadmap
    /// Make `Phase` active and restart the tour on it.
    SelectPhase(Phase),
    /// Select the phase after the active one.
    NextPhase,
    /// Select the phase before the active one.
    PreviousPhase,
    /// Manually expand or collapse a topic by id.
    ToggleTopic(String),
    /// Toggle whichever topic is selected.
    ToggleSelected,
    /// Clear expansion and tour the active phase from the start.
    RestartTour,
    /// Stop the tour, keeping what is expanded.
    StopTour,

    // Timers
    /// A guided tour step came due.
    TourTimer(ScheduledStep),

    // Presentation
    /// Switch between light and dark themes.
    ToggleTheme,
}

impl Action {
    /// High-frequency actions that are not worth a log line each.
    pub fn is_noisy(&self) -> bool {
        matches!(self, Self::Tick | Self::Mouse(_) | Self::Resize(..))
    }
}
