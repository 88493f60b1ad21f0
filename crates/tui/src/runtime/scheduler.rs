//! Cancelable timers for the guided tour.
//!
//! Responsibilities:
//! - Turn `TimerCommand`s from the tour machine into tokio sleep tasks.
//! - Deliver due steps back to the event loop as `Action::TourTimer`.
//!
//! Does NOT handle:
//! - Deciding what a step does or whether it is stale (see `tour::TourMachine`).
//!
//! Invariants:
//! - At most one timer is pending; scheduling a new one cancels the previous.
//! - A cancelled timer never sends its action.
//! - All timer tasks are tracked so shutdown can wait for them.

use std::time::Duration;

use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::action::Action;
use crate::tour::{ScheduledStep, TimerCommand};

/// Handle to the one timer that may currently be pending.
#[derive(Debug)]
struct TimerHandle {
    token: CancellationToken,
    step: ScheduledStep,
}

impl TimerHandle {
    fn cancel(self) {
        self.token.cancel();
    }
}

/// Owns the pending tour timer and the tasks backing it.
#[derive(Debug)]
pub struct TourScheduler {
    tx: Sender<Action>,
    tracker: TaskTracker,
    pending: Option<TimerHandle>,
}

impl TourScheduler {
    pub fn new(tx: Sender<Action>) -> Self {
        Self {
            tx,
            tracker: TaskTracker::new(),
            pending: None,
        }
    }

    /// Apply a command produced by a tour transition.
    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Schedule { step, delay } => self.schedule(step, delay),
            TimerCommand::Cancel => self.cancel(),
        }
    }

    /// Start a timer for `step`, replacing any pending one.
    pub fn schedule(&mut self, step: ScheduledStep, delay: Duration) {
        self.cancel();

        let token = CancellationToken::new();
        let task_token = token.clone();
        let tx = self.tx.clone();
        self.tracker.spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    if tx.send(Action::TourTimer(step)).await.is_err() {
                        tracing::debug!(?step, "Event loop gone before tour step fired");
                    }
                }
            }
        });

        tracing::trace!(?step, delay_ms = delay.as_millis() as u64, "Tour step scheduled");
        self.pending = Some(TimerHandle { token, step });
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            tracing::trace!(step = ?handle.step, "Tour step cancelled");
            handle.cancel();
        }
    }

    /// The step currently waiting to fire.
    pub fn pending(&self) -> Option<ScheduledStep> {
        self.pending.as_ref().map(|handle| handle.step)
    }

    /// Cancel everything and wait for the timer tasks to finish.
    pub async fn shutdown(mut self) {
        self.cancel();
        self.tracker.close();
        self.tracker.wait().await;
    }
}
