//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Hand the resulting timer command back to the runtime
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers)
//! - Does NOT perform async operations or sleep

use std::time::Duration;

use roadmap_config::Theme;
use roadmap_config::constants::DEFAULT_UI_TICK_MS;

use crate::action::Action;
use crate::app::App;
use crate::tour::TimerCommand;
use crate::ui::PhaseTransition;

impl App {
    /// Pure state mutation based on Action.
    ///
    /// Returns the timer command the runtime must apply, if the action
    /// touched the tour. `None` leaves any pending timer alone.
    pub fn update(&mut self, action: Action) -> Option<TimerCommand> {
        let phase_before = self.machine.active_phase();

        let command = match action {
            Action::Tick => {
                self.tick(Duration::from_millis(DEFAULT_UI_TICK_MS));
                None
            }
            Action::Resize(width, height) => {
                self.last_area.width = width;
                self.last_area.height = height;
                None
            }
            Action::SelectNext => {
                let len = self.visible_rows().len();
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                None
            }
            Action::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Action::SelectPhase(phase) => Some(self.machine.select_phase(phase)),
            Action::NextPhase => {
                let next = self.machine.active_phase().next();
                Some(self.machine.select_phase(next))
            }
            Action::PreviousPhase => {
                let previous = self.machine.active_phase().previous();
                Some(self.machine.select_phase(previous))
            }
            Action::ToggleTopic(id) => Some(self.toggle_topic(&id)),
            Action::ToggleSelected => self.selected_id().map(|id| self.toggle_topic(&id)),
            Action::RestartTour => Some(self.machine.restart()),
            Action::StopTour => Some(self.machine.stop()),
            Action::TourTimer(step) => self.machine.on_timer(step),
            Action::ToggleTheme => {
                self.color_theme = self.color_theme.toggle();
                self.theme = Theme::from_color_theme(self.color_theme);
                tracing::debug!(theme = %self.color_theme, "Theme toggled");
                None
            }
            // Translated or handled by the event loop before reaching here.
            Action::Quit | Action::Input(_) | Action::Mouse(_) => None,
        };

        if self.machine.active_phase() != phase_before {
            self.selected = 0;
            self.list_offset = 0;
            self.transition = Some(PhaseTransition::default());
        }
        self.clamp_selection();
        command
    }

    fn toggle_topic(&mut self, id: &str) -> TimerCommand {
        let command = self.machine.toggle(id);
        self.select_id(id);
        command
    }

    fn tick(&mut self, dt: Duration) {
        if let Some(transition) = self.transition.as_mut() {
            transition.tick(dt);
            if transition.is_done() {
                self.transition = None;
            }
        }
    }
}
