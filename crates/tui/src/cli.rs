//! Command-line argument parsing for ba-roadmap.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration merging or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use roadmap_config::ColorTheme;
use std::path::PathBuf;

use crate::content::Phase;

/// Command-line arguments for ba-roadmap.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme, --autoplay)
/// 2. Environment variables (e.g., ROADMAP_THEME, ROADMAP_AUTOPLAY)
/// 3. Default values
#[derive(Debug, Parser)]
#[command(
    name = "ba-roadmap",
    about = "Interactive business analyst skills roadmap for the terminal",
    version,
    after_help = "Examples:\n  ba-roadmap\n  ba-roadmap --autoplay\n  ba-roadmap --phase ai-integration --theme dark\n  ba-roadmap --outline\n"
)]
pub struct Cli {
    /// Initial color theme (light or dark)
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// Start the guided tour immediately
    #[arg(long)]
    pub autoplay: bool,

    /// Initial phase (foundation, intermediate, advanced, ai-integration)
    #[arg(long)]
    pub phase: Option<Phase>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Print the roadmap as a plain-text outline and exit
    #[arg(long)]
    pub outline: bool,
}
