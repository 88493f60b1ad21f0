//! Theme types for the roadmap TUI.
//!
//! Responsibilities:
//! - Define the user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - `Theme` is intentionally NOT serializable; only `ColorTheme` crosses config boundaries.
//! - Switching themes never changes application state, only colors.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Light,
    Dark,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// The other theme (used by the `t` key).
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Select a `ColorTheme` and expand it.
/// - One accent per roadmap phase, in phase order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub disabled: Color,

    // Inactive phase buttons
    pub button_fg: Color,
    pub button_bg: Color,

    // Phase accents
    pub phase_foundation: Color,
    pub phase_intermediate: Color,
    pub phase_advanced: Color,
    pub phase_ai_integration: Color,
}

impl Theme {
    /// Expand a `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::DarkGray,
                border: Color::Gray,
                title: Color::Blue,
                accent: Color::Magenta,

                highlight_fg: Color::Black,
                highlight_bg: Color::Indexed(254),
                disabled: Color::Gray,

                button_fg: Color::DarkGray,
                button_bg: Color::Indexed(252),

                phase_foundation: Color::Indexed(91),     // purple
                phase_intermediate: Color::Indexed(25),   // blue
                phase_advanced: Color::Indexed(29),       // teal green
                phase_ai_integration: Color::Indexed(160), // red
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(240),
                title: Color::Indexed(110),
                accent: Color::Indexed(214),

                highlight_fg: Color::White,
                highlight_bg: Color::Indexed(236),
                disabled: Color::DarkGray,

                button_fg: Color::Gray,
                button_bg: Color::Indexed(238),

                phase_foundation: Color::Indexed(141),
                phase_intermediate: Color::Indexed(75),
                phase_advanced: Color::Indexed(78),
                phase_ai_integration: Color::Indexed(209),
            },
        }
    }

    /// Phase accents in roadmap order.
    pub fn phase_accents(&self) -> [Color; 4] {
        [
            self.phase_foundation,
            self.phase_intermediate,
            self.phase_advanced,
            self.phase_ai_integration,
        ]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ColorTheme::Dark.toggle(), ColorTheme::Light);
        assert_eq!(ColorTheme::Light.toggle().toggle(), ColorTheme::Light);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ColorTheme::default(), ColorTheme::Light);
        assert_eq!(Theme::default(), Theme::from_color_theme(ColorTheme::Light));
    }

    #[test]
    fn test_from_str_accepts_mixed_case() {
        assert_eq!("LIGHT".parse::<ColorTheme>(), Ok(ColorTheme::Light));
        assert_eq!(" dark ".parse::<ColorTheme>(), Ok(ColorTheme::Dark));
        assert!("solarized".parse::<ColorTheme>().is_err());
    }

    #[test]
    fn test_themes_differ_in_text_color() {
        let light = Theme::from_color_theme(ColorTheme::Light);
        let dark = Theme::from_color_theme(ColorTheme::Dark);
        assert_ne!(light.text, dark.text);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn test_phase_accents_are_distinct() {
        for theme in [ColorTheme::Light, ColorTheme::Dark] {
            let accents = Theme::from_color_theme(theme).phase_accents();
            for (i, a) in accents.iter().enumerate() {
                for b in &accents[i + 1..] {
                    assert_ne!(a, b, "{theme} reuses a phase accent");
                }
            }
        }
    }

    #[test]
    fn test_color_theme_serde_snake_case() {
        let json = serde_json::to_string(&ColorTheme::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }
}
