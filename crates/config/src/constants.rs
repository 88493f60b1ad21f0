//! Centralized constants for the roadmap workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Guided Tour Timing Defaults
// =============================================================================

/// Delay before the topic under the tour cursor is revealed, in milliseconds.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 2_000;

/// Delay between revealing a topic and moving the cursor on, in milliseconds.
pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 5_000;

/// Delay between finishing a phase and switching to the next one, in milliseconds.
pub const DEFAULT_PHASE_DELAY_MS: u64 = 5_000;

/// Upper bound accepted for any tour delay (one minute).
pub const MAX_TOUR_DELAY_MS: u64 = 60_000;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 100;

/// Duration of the slide-in played when the active phase changes.
pub const PHASE_TRANSITION_MS: u64 = 2_000;

// =============================================================================
// Environment Variables
// =============================================================================

/// Initial color theme (`light` or `dark`).
pub const ENV_THEME: &str = "ROADMAP_THEME";

/// Override for [`DEFAULT_REVEAL_DELAY_MS`].
pub const ENV_REVEAL_DELAY_MS: &str = "ROADMAP_REVEAL_DELAY_MS";

/// Override for [`DEFAULT_ADVANCE_DELAY_MS`].
pub const ENV_ADVANCE_DELAY_MS: &str = "ROADMAP_ADVANCE_DELAY_MS";

/// Override for [`DEFAULT_PHASE_DELAY_MS`].
pub const ENV_PHASE_DELAY_MS: &str = "ROADMAP_PHASE_DELAY_MS";

/// Start the guided tour on launch (`true` or `false`).
pub const ENV_AUTOPLAY: &str = "ROADMAP_AUTOPLAY";
