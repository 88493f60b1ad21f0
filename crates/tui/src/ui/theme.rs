//! TUI-specific theme helpers and style builders.
//!
//! This module extends `roadmap_config::Theme` with ergonomic helpers
//! for building ratatui `Style` objects consistently across the TUI.

use ratatui::style::{Color, Modifier, Style};
use roadmap_config::Theme;

use crate::content::Phase;

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Get the base text style.
    fn text(&self) -> Style;
    /// Get dimmed text style.
    fn text_dim(&self) -> Style;
    /// Get title style (title color + bold).
    fn title(&self) -> Style;
    /// Get border style.
    fn border(&self) -> Style;
    /// Get highlight/selection style.
    fn highlight(&self) -> Style;
    /// Get disabled style.
    fn disabled(&self) -> Style;
    /// Accent color of a phase.
    fn phase_accent(&self, phase: Phase) -> Color;
    /// Style for a phase selector button.
    fn phase_button(&self, phase: Phase, active: bool) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn phase_accent(&self, phase: Phase) -> Color {
        self.phase_accents()[phase.index()]
    }

    fn phase_button(&self, phase: Phase, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.background)
                .bg(self.phase_accent(phase))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.button_fg).bg(self.button_bg)
        }
    }
}

/// Helper functions for common style patterns.
pub mod helpers {
    use super::*;

    /// Create a style for selected items in a list.
    pub fn selected_style(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.highlight_fg)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Create a muted/secondary text style.
    pub fn muted_style(theme: &Theme) -> Style {
        Style::default().fg(theme.text_dim)
    }

    /// Create a primary action button style.
    pub fn primary_button_style(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Heading style tinted with a phase accent.
    pub fn phase_heading_style(theme: &Theme, phase: Phase) -> Style {
        Style::default()
            .fg(theme.phase_accent(phase))
            .add_modifier(Modifier::BOLD)
    }
}
