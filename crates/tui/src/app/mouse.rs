//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Handle mouse scroll events
//! - Handle phase button, topic row and footer restart clicks
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::action::Action;
use crate::app::App;
use crate::app::layout::AppLayout;
use crate::ui::roadmap::{row_at_line, row_height};

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::SelectPrevious),
            MouseEventKind::ScrollDown => Some(Action::SelectNext),
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                let layout = AppLayout::calculate(self.last_area);

                if let Some(phase) = layout.phase_at(position) {
                    return Some(Action::SelectPhase(phase));
                }
                if layout.restart_button.contains(position) {
                    return Some(Action::RestartTour);
                }
                if layout.topics_inner.contains(position) {
                    return self.handle_topic_click(&layout, mouse.row);
                }
                None
            }
            _ => None,
        }
    }

    /// Select and toggle the topic row drawn at `row`.
    fn handle_topic_click(&mut self, layout: &AppLayout, row: u16) -> Option<Action> {
        let width = layout.topics_inner.width;
        let line = usize::from(row - layout.topics_inner.y);

        let (index, id) = {
            let rows = self.visible_rows();
            let heights: Vec<usize> = rows.iter().map(|r| row_height(r, width)).collect();
            let index = row_at_line(&heights, self.list_offset, line)?;
            (index, rows[index].topic.id.clone())
        };
        self.selected = index;
        Some(Action::ToggleTopic(id))
    }
}
