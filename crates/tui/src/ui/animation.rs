//! Phase change slide-in animation.
//!
//! Progress is driven by UI ticks rather than wall-clock reads so rendering
//! stays deterministic under test.

use std::time::Duration;

use roadmap_config::constants::PHASE_TRANSITION_MS;

/// Maximum horizontal shift of the banner at the start of a transition.
pub const SLIDE_COLUMNS: u16 = 6;

/// A running slide-in of the phase banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    elapsed: Duration,
    duration: Duration,
}

impl Default for PhaseTransition {
    fn default() -> Self {
        Self::new(Duration::from_millis(PHASE_TRANSITION_MS))
    }
}

impl PhaseTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Advance the animation by one tick.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Completion in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Columns the banner is shifted right by at this point of the slide.
    pub fn offset(&self) -> u16 {
        let remaining = 1.0 - self.progress();
        (f32::from(SLIDE_COLUMNS) * remaining).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_starts_shifted() {
        let transition = PhaseTransition::default();
        assert_eq!(transition.progress(), 0.0);
        assert_eq!(transition.offset(), SLIDE_COLUMNS);
        assert!(!transition.is_done());
    }

    #[test]
    fn test_transition_completes_after_duration() {
        let mut transition = PhaseTransition::default();
        for _ in 0..19 {
            transition.tick(Duration::from_millis(100));
        }
        assert!(!transition.is_done());
        transition.tick(Duration::from_millis(100));
        assert!(transition.is_done());
        assert_eq!(transition.offset(), 0);
    }

    #[test]
    fn test_tick_saturates_at_duration() {
        let mut transition = PhaseTransition::new(Duration::from_millis(200));
        transition.tick(Duration::from_secs(5));
        assert_eq!(transition.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_is_immediately_done() {
        let transition = PhaseTransition::new(Duration::ZERO);
        assert!(transition.is_done());
        assert_eq!(transition.offset(), 0);
    }
}
