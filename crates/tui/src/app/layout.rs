//! Screen regions for rendering and hit-testing.
//!
//! Responsibilities:
//! - Split the terminal into header, phase bar, banner, topic list, tip and footer
//! - Locate the phase buttons and the footer restart button
//!
//! Does NOT handle:
//! - Does NOT render (see render.rs)
//! - Does NOT handle mouse events (see mouse.rs)
//!
//! Invariants:
//! - Rendering and mouse hit-testing both call `AppLayout::calculate` with the
//!   same area, so click targets always match what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::content::Phase;

pub const HEADER_HEIGHT: u16 = 2;
pub const PHASE_BAR_HEIGHT: u16 = 4;
pub const BANNER_HEIGHT: u16 = 4;
pub const TIP_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 1;

/// Label of the footer restart button.
pub const RESTART_BUTTON: &str = "[ Restart tour ]";

/// Regions of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub phase_bar: Rect,
    pub phase_buttons: [Rect; 4],
    pub banner: Rect,
    pub topics: Rect,
    /// Topic list area inside its border.
    pub topics_inner: Rect,
    pub tip: Rect,
    pub footer: Rect,
    pub restart_button: Rect,
}

impl AppLayout {
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(PHASE_BAR_HEIGHT),
                Constraint::Length(BANNER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(TIP_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(chunks[1]);
        let phase_buttons = [buttons[0], buttons[1], buttons[2], buttons[3]];

        let footer = chunks[5];
        let restart_width = (RESTART_BUTTON.chars().count() as u16).min(footer.width);
        let restart_button = Rect::new(footer.x, footer.y, restart_width, footer.height);

        let topics = chunks[3];
        Self {
            header: chunks[0],
            phase_bar: chunks[1],
            phase_buttons,
            banner: chunks[2],
            topics,
            topics_inner: inner(topics),
            tip: chunks[4],
            footer,
            restart_button,
        }
    }

    /// Phase whose button covers `position`.
    pub fn phase_at(&self, position: Position) -> Option<Phase> {
        self.phase_buttons
            .iter()
            .position(|rect| rect.contains(position))
            .and_then(Phase::from_index)
    }
}

/// Area inside a one-cell border.
fn inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}
