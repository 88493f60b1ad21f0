//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from environment variables and direct builder methods.
//! - Build and validate the final `RoadmapConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Values are last-writer-wins; callers apply `from_env()` before CLI overrides
//!   so that the precedence is CLI > environment > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Every tour delay is in `(0, MAX_TOUR_DELAY_MS]` after `build()`.

use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::MAX_TOUR_DELAY_MS;
use crate::types::{ColorTheme, TourTimings};

/// Fully resolved configuration for one roadmap session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoadmapConfig {
    /// Initial color theme.
    pub theme: ColorTheme,
    /// Guided tour delays.
    pub timings: TourTimings,
    /// Whether the guided tour starts as soon as the UI is up.
    pub autoplay: bool,
}

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    theme: Option<ColorTheme>,
    autoplay: Option<bool>,
    reveal_delay: Option<Duration>,
    advance_delay: Option<Duration>,
    phase_delay: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Set whether the tour starts on launch.
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    /// Set the reveal delay.
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = Some(delay);
        self
    }

    /// Set the advance delay.
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = Some(delay);
        self
    }

    /// Set the phase delay.
    pub fn with_phase_delay(mut self, delay: Duration) -> Self {
        self.phase_delay = Some(delay);
        self
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_autoplay(&mut self, autoplay: Option<bool>) {
        self.autoplay = autoplay;
    }

    pub(crate) fn set_reveal_delay(&mut self, delay: Option<Duration>) {
        self.reveal_delay = delay;
    }

    pub(crate) fn set_advance_delay(&mut self, delay: Option<Duration>) {
        self.advance_delay = delay;
    }

    pub(crate) fn set_phase_delay(&mut self, delay: Option<Duration>) {
        self.phase_delay = delay;
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<RoadmapConfig, ConfigError> {
        let defaults = TourTimings::default();
        let timings = TourTimings {
            reveal_delay: self.reveal_delay.unwrap_or(defaults.reveal_delay),
            advance_delay: self.advance_delay.unwrap_or(defaults.advance_delay),
            phase_delay: self.phase_delay.unwrap_or(defaults.phase_delay),
        };

        Self::validate_timings(&timings)?;

        Ok(RoadmapConfig {
            theme: self.theme.unwrap_or_default(),
            timings,
            autoplay: self.autoplay.unwrap_or(false),
        })
    }

    /// Validates that each tour delay is greater than zero and at most
    /// `MAX_TOUR_DELAY_MS`.
    fn validate_timings(timings: &TourTimings) -> Result<(), ConfigError> {
        let checks = [
            ("reveal delay", timings.reveal_delay),
            ("advance delay", timings.advance_delay),
            ("phase delay", timings.phase_delay),
        ];

        for (name, delay) in checks {
            if delay.is_zero() {
                return Err(ConfigError::InvalidDelay {
                    message: format!("{name} must be greater than 0 ms"),
                });
            }
            if delay > Duration::from_millis(MAX_TOUR_DELAY_MS) {
                return Err(ConfigError::InvalidDelay {
                    message: format!(
                        "{name} exceeds maximum allowed value of {MAX_TOUR_DELAY_MS} ms"
                    ),
                });
            }
        }
        Ok(())
    }
}
