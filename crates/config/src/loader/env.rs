//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ROADMAP_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return ConfigError::InvalidValue.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_ADVANCE_DELAY_MS, ENV_AUTOPLAY, ENV_PHASE_DELAY_MS, ENV_REVEAL_DELAY_MS, ENV_THEME,
};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_millis(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be a whole number of milliseconds".to_string(),
        })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let theme: ColorTheme = theme.parse().map_err(|message| ConfigError::InvalidValue {
            var: ENV_THEME.to_string(),
            message,
        })?;
        loader.set_theme(Some(theme));
    }
    if let Some(autoplay) = env_var_or_none(ENV_AUTOPLAY) {
        loader.set_autoplay(Some(autoplay.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_AUTOPLAY.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(ms) = env_var_or_none(ENV_REVEAL_DELAY_MS) {
        loader.set_reveal_delay(Some(parse_millis(ENV_REVEAL_DELAY_MS, &ms)?));
    }
    if let Some(ms) = env_var_or_none(ENV_ADVANCE_DELAY_MS) {
        loader.set_advance_delay(Some(parse_millis(ENV_ADVANCE_DELAY_MS, &ms)?));
    }
    if let Some(ms) = env_var_or_none(ENV_PHASE_DELAY_MS) {
        loader.set_phase_delay(Some(parse_millis(ENV_PHASE_DELAY_MS, &ms)?));
    }
    Ok(())
}
