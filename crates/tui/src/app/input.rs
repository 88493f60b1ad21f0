//! Keyboard input handling for the TUI app.
//!
//! Responsibilities:
//! - Translate key presses into Actions for the main loop
//!
//! Non-responsibilities:
//! - Does NOT mutate App state directly (returns Actions)

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::content::Phase;

impl App {
    /// Handle keyboard input - returns Action if one should be dispatched.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Phase::from_index(index).map(Action::SelectPhase)
            }
            KeyCode::Tab | KeyCode::Right => Some(Action::NextPhase),
            KeyCode::BackTab | KeyCode::Left => Some(Action::PreviousPhase),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleSelected),
            KeyCode::Char('r') => Some(Action::RestartTour),
            KeyCode::Char('s') => Some(Action::StopTour),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        }
    }
}
