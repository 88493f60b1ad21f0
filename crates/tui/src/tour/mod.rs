//! Disclosure and guided-tour state machine.
//!
//! Responsibilities:
//! - Track which topics are expanded (`ExpansionState`).
//! - Track the active phase and the guided tour cursor (`TourState`).
//! - Implement every transition (toggle, phase selection, restart, stop, timed steps).
//! - Tell the runtime which timer to schedule or cancel (`TimerCommand`).
//!
//! Does NOT handle:
//! - Actually waiting; timers are spawned by `runtime::scheduler`.
//! - Rendering or input decoding.
//!
//! Invariants:
//! - At most one timed step is pending at any time.
//! - The epoch changes whenever the pending step is invalidated; a step
//!   carrying any other epoch, or arriving while idle, is ignored.
//! - `cursor <= topics(active_phase).len()`.
//! - Expansion entries only ever name topics present in the content store.

mod expansion;
mod machine;

pub use expansion::ExpansionState;
pub use machine::{ScheduledStep, TimerCommand, TourMachine, TourState, TourStatus, TourStep};
