//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Merge `.env`, environment variables and CLI flags into a `RoadmapConfig`.
//!
//! Does NOT handle:
//! - Environment variable parsing (see `roadmap_config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > defaults.
//! - `load_dotenv()` is called before reading the environment.

use anyhow::{Context, Result};
use roadmap_config::{ConfigLoader, RoadmapConfig};

use crate::cli::Cli;

/// Resolve the session configuration from the environment and CLI flags.
pub fn load_config(cli: &Cli) -> Result<RoadmapConfig> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?
        .from_env()
        .context("Invalid ROADMAP_* environment variable")?;

    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    // The flag can only switch autoplay on; absence defers to the environment.
    if cli.autoplay {
        loader = loader.with_autoplay(true);
    }

    let config = loader.build().context("Invalid roadmap configuration")?;
    tracing::debug!(?config, "Configuration resolved");
    Ok(config)
}
