//! Guided tour timing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_ADVANCE_DELAY_MS, DEFAULT_PHASE_DELAY_MS, DEFAULT_REVEAL_DELAY_MS};

/// Delays used by the guided tour.
///
/// Each topic goes through two timed stages (reveal, then advance); once every
/// topic of a phase has been visited the tour waits `phase_delay` before
/// switching to the next phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourTimings {
    /// Wait before the topic under the cursor is expanded.
    #[serde(with = "millis")]
    pub reveal_delay: Duration,
    /// Wait after a reveal before the cursor moves to the next topic.
    #[serde(with = "millis")]
    pub advance_delay: Duration,
    /// Wait after the last topic before the next phase starts.
    #[serde(with = "millis")]
    pub phase_delay: Duration,
}

impl Default for TourTimings {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            advance_delay: Duration::from_millis(DEFAULT_ADVANCE_DELAY_MS),
            phase_delay: Duration::from_millis(DEFAULT_PHASE_DELAY_MS),
        }
    }
}

impl TourTimings {
    /// Uniform timings, mostly useful in tests.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            reveal_delay: delay,
            advance_delay: delay,
            phase_delay: delay,
        }
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
