//! Core App lifecycle methods.
//!
//! Responsibilities:
//! - App construction
//! - Read-only views used by rendering and input
//!
//! Does NOT handle:
//! - Does NOT handle runtime updates (see actions.rs)
//! - Does NOT render (see render.rs)

use std::sync::Arc;

use ratatui::layout::Rect;
use roadmap_config::{RoadmapConfig, Theme};

use crate::app::App;
use crate::content::{ContentStore, Phase};
use crate::tour::{TimerCommand, TourMachine, TourStatus};
use crate::ui::{TopicRow, visible_rows};

impl App {
    /// Create a new App instance.
    ///
    /// # Arguments
    ///
    /// * `config` - Resolved session configuration
    /// * `content` - Validated roadmap content
    /// * `phase` - Phase to open on
    pub fn new(config: &RoadmapConfig, content: Arc<ContentStore>, phase: Phase) -> Self {
        Self {
            machine: TourMachine::new(content, config.timings).with_phase(phase),
            color_theme: config.theme,
            theme: Theme::from_color_theme(config.theme),
            selected: 0,
            list_offset: 0,
            transition: None,
            last_area: Rect::default(),
        }
    }

    /// Start the guided tour on the current phase, as `--autoplay` does.
    pub fn start_tour(&mut self) -> TimerCommand {
        self.machine.restart()
    }

    /// Rows currently shown in the topic list.
    pub fn visible_rows(&self) -> Vec<TopicRow<'_>> {
        visible_rows(self.machine.active_topics(), self.machine.expansion())
    }

    /// Id of the selected topic, if the list is not empty.
    pub fn selected_id(&self) -> Option<String> {
        self.visible_rows()
            .get(self.selected)
            .map(|row| row.topic.id.clone())
    }

    /// Footer status text: tour progress or idle.
    pub fn tour_status_label(&self) -> String {
        match self.machine.status() {
            TourStatus::Idle => "Idle".to_string(),
            TourStatus::Touring => {
                let len = self.machine.active_topics().len();
                let shown = (self.machine.state().cursor + 1).min(len);
                format!("Touring {shown}/{len}")
            }
        }
    }

    pub(crate) fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Put the selection on the row showing `id`, when visible.
    pub(crate) fn select_id(&mut self, id: &str) {
        if let Some(index) = self
            .visible_rows()
            .iter()
            .position(|row| row.topic.id == id)
        {
            self.selected = index;
        } else {
            self.clamp_selection();
        }
    }
}
