//! Tour transitions.

use std::sync::Arc;
use std::time::Duration;

use roadmap_config::TourTimings;

use super::expansion::ExpansionState;
use crate::content::{ContentStore, Phase, Topic};

/// Whether the guided tour is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TourStatus {
    /// Manual browsing.
    #[default]
    Idle,
    /// Timer-driven walkthrough.
    Touring,
}

/// Active phase plus tour progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TourState {
    pub active_phase: Phase,
    pub auto_playing: bool,
    /// Index into the active phase's top-level topics.
    pub cursor: usize,
}

impl TourState {
    pub fn status(&self) -> TourStatus {
        if self.auto_playing {
            TourStatus::Touring
        } else {
            TourStatus::Idle
        }
    }
}

/// One timed transition of the tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourStep {
    /// Expand the topic at `cursor` (and its sub-items).
    Reveal { cursor: usize },
    /// Move the cursor past `cursor`.
    Advance { cursor: usize },
    /// Switch to the next phase and start it over.
    NextPhase,
}

/// A step tagged with the epoch it was scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub epoch: u64,
    pub step: TourStep,
}

/// What the runtime must do with its pending timer after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Replace any pending timer with this one.
    Schedule { step: ScheduledStep, delay: Duration },
    /// Drop the pending timer, if any.
    Cancel,
}

impl TimerCommand {
    /// The step this command schedules, if it schedules one.
    pub fn scheduled(&self) -> Option<ScheduledStep> {
        match self {
            Self::Schedule { step, .. } => Some(*step),
            Self::Cancel => None,
        }
    }
}

/// Owner of all mutable roadmap state.
///
/// Every public transition returns the [`TimerCommand`] the runtime has to
/// apply; the machine itself never sleeps, which keeps it deterministic.
#[derive(Debug, Clone)]
pub struct TourMachine {
    content: Arc<ContentStore>,
    timings: TourTimings,
    expansion: ExpansionState,
    state: TourState,
    epoch: u64,
    pending: Option<ScheduledStep>,
}

impl TourMachine {
    /// Idle machine on the first phase.
    pub fn new(content: Arc<ContentStore>, timings: TourTimings) -> Self {
        Self {
            content,
            timings,
            expansion: ExpansionState::new(),
            state: TourState::default(),
            epoch: 0,
            pending: None,
        }
    }

    /// Idle machine on `phase`.
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.state.active_phase = phase;
        self
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn timings(&self) -> TourTimings {
        self.timings
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn state(&self) -> TourState {
        self.state
    }

    pub fn status(&self) -> TourStatus {
        self.state.status()
    }

    pub fn active_phase(&self) -> Phase {
        self.state.active_phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The step the machine is waiting for, if touring.
    pub fn pending(&self) -> Option<ScheduledStep> {
        self.pending
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Top-level topics of the active phase.
    pub fn active_topics(&self) -> &[Topic] {
        self.content.topics(self.state.active_phase)
    }

    /// Manual click on a topic: flip it and leave the tour.
    pub fn toggle(&mut self, id: &str) -> TimerCommand {
        self.enter_idle();
        if self.content.contains(id) {
            let expanded = self.expansion.toggle(id);
            tracing::debug!(id, expanded, "Topic toggled");
        } else {
            tracing::warn!(id, "Ignoring toggle for unknown topic");
        }
        TimerCommand::Cancel
    }

    /// Phase button: reset expansion and restart the tour on `phase`.
    pub fn select_phase(&mut self, phase: Phase) -> TimerCommand {
        if phase != self.state.active_phase {
            tracing::info!(from = %self.state.active_phase, to = %phase, "Active phase changed");
        }
        self.state.active_phase = phase;
        self.start_tour()
    }

    /// "Restart tour" control: reset expansion and tour the current phase again.
    pub fn restart(&mut self) -> TimerCommand {
        tracing::info!(phase = %self.state.active_phase, "Tour restarted");
        self.start_tour()
    }

    /// Pause the tour without touching expansion.
    pub fn stop(&mut self) -> TimerCommand {
        if self.state.auto_playing {
            tracing::info!(phase = %self.state.active_phase, cursor = self.state.cursor, "Tour stopped");
        }
        self.enter_idle();
        TimerCommand::Cancel
    }

    /// A scheduled step came due.
    ///
    /// Returns `None` when the step is stale; the runtime then keeps whatever
    /// timer it currently holds.
    pub fn on_timer(&mut self, fired: ScheduledStep) -> Option<TimerCommand> {
        if !self.state.auto_playing || self.pending != Some(fired) {
            tracing::debug!(
                ?fired,
                epoch = self.epoch,
                pending = ?self.pending,
                "Ignoring stale tour step"
            );
            return None;
        }
        self.pending = None;

        let command = match fired.step {
            TourStep::Reveal { cursor } => self.reveal(cursor),
            TourStep::Advance { cursor } => self.advance(cursor),
            TourStep::NextPhase => {
                let next = self.state.active_phase.next();
                self.select_phase(next)
            }
        };
        Some(command)
    }

    fn reveal(&mut self, cursor: usize) -> TimerCommand {
        if let Some(topic) = self.content.topics(self.state.active_phase).get(cursor) {
            for id in topic.ids() {
                self.expansion.expand(id);
            }
            tracing::debug!(id = %topic.id, cursor, "Tour revealed topic");
        }
        self.schedule(TourStep::Advance { cursor }, self.timings.advance_delay)
    }

    fn advance(&mut self, cursor: usize) -> TimerCommand {
        let len = self.active_topics().len();
        self.state.cursor = (cursor + 1).min(len);
        self.schedule_from_cursor()
    }

    fn start_tour(&mut self) -> TimerCommand {
        self.expansion.clear();
        self.state.cursor = 0;
        self.state.auto_playing = true;
        self.epoch += 1;
        self.schedule_from_cursor()
    }

    /// Next step for the current cursor: a reveal while topics remain, the
    /// phase switch once the phase is exhausted (immediately for empty phases).
    fn schedule_from_cursor(&mut self) -> TimerCommand {
        let cursor = self.state.cursor;
        if cursor < self.active_topics().len() {
            self.schedule(TourStep::Reveal { cursor }, self.timings.reveal_delay)
        } else {
            tracing::debug!(phase = %self.state.active_phase, "Phase exhausted");
            self.schedule(TourStep::NextPhase, self.timings.phase_delay)
        }
    }

    fn schedule(&mut self, step: TourStep, delay: Duration) -> TimerCommand {
        let step = ScheduledStep {
            epoch: self.epoch,
            step,
        };
        self.pending = Some(step);
        TimerCommand::Schedule { step, delay }
    }

    fn enter_idle(&mut self) {
        if self.state.auto_playing {
            self.state.auto_playing = false;
            self.epoch += 1;
        }
        self.pending = None;
    }
}
