//! Property-based tests for configuration validation.

use proptest::prelude::*;
use roadmap_config::constants::MAX_TOUR_DELAY_MS;
use roadmap_config::{ConfigError, ConfigLoader};
use std::time::Duration;

proptest! {
    #[test]
    fn valid_delays_always_build(
        reveal in 1..=MAX_TOUR_DELAY_MS,
        advance in 1..=MAX_TOUR_DELAY_MS,
        phase in 1..=MAX_TOUR_DELAY_MS,
    ) {
        let config = ConfigLoader::new()
            .with_reveal_delay(Duration::from_millis(reveal))
            .with_advance_delay(Duration::from_millis(advance))
            .with_phase_delay(Duration::from_millis(phase))
            .build();
        prop_assert!(config.is_ok());
        let config = config.unwrap();
        prop_assert_eq!(config.timings.advance_delay.as_millis() as u64, advance);
    }

    #[test]
    fn oversized_delays_are_rejected(extra in 1u64..1_000_000) {
        let result = ConfigLoader::new()
            .with_advance_delay(Duration::from_millis(MAX_TOUR_DELAY_MS + extra))
            .build();
        prop_assert!(matches!(result, Err(ConfigError::InvalidDelay { .. })), "expected InvalidDelay");
    }
}
