//! Topic list row model.
//!
//! Responsibilities:
//! - Flatten the active phase's topic tree into the rows currently visible.
//! - Build the styled lines for one row and report its height.
//! - Keep the selected row inside the viewport.
//!
//! Does NOT handle:
//! - Deciding what is expanded (see `tour::TourMachine`).
//! - Frame layout (see `app::render`).
//!
//! Invariants:
//! - Sub-item rows appear only directly under an expanded parent.
//! - `row_height` always equals `row_lines(..).len()` for the same width, so
//!   mouse hit-testing lines up with what was drawn.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use roadmap_config::Theme;

use crate::content::Topic;
use crate::tour::ExpansionState;
use crate::ui::theme::{ThemeExt, helpers};

pub const CHEVRON_COLLAPSED: char = '▸';
pub const CHEVRON_EXPANDED: char = '▾';
pub const TOUR_MARKER: char = '▶';

/// Columns taken by marker, chevron and icon before the title.
const ROW_PREFIX: usize = 6;
/// Indentation per nesting level.
const INDENT: usize = 2;

/// One visible entry of the topic list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicRow<'a> {
    pub topic: &'a Topic,
    /// 0 for top-level topics, 1 for sub-items.
    pub depth: usize,
    /// Index of the owning top-level topic.
    pub top_index: usize,
    pub expanded: bool,
}

impl TopicRow<'_> {
    fn indent(&self) -> usize {
        self.depth * INDENT
    }

    fn description_width(&self, width: u16) -> usize {
        usize::from(width).saturating_sub(self.indent() + ROW_PREFIX)
    }
}

/// Rows shown for `topics` under the given expansion state.
pub fn visible_rows<'a>(topics: &'a [Topic], expansion: &ExpansionState) -> Vec<TopicRow<'a>> {
    let mut rows = Vec::with_capacity(topics.len());
    for (top_index, topic) in topics.iter().enumerate() {
        let expanded = expansion.is_expanded(&topic.id);
        rows.push(TopicRow {
            topic,
            depth: 0,
            top_index,
            expanded,
        });
        if expanded {
            rows.extend(topic.sub_items.iter().map(|sub| TopicRow {
                topic: sub,
                depth: 1,
                top_index,
                expanded: expansion.is_expanded(&sub.id),
            }));
        }
    }
    rows
}

/// Greedy word wrap on character counts.
///
/// Words longer than `width` are split. A zero width yields the text unwrapped.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Number of terminal lines `row` occupies at `width`.
pub fn row_height(row: &TopicRow<'_>, width: u16) -> usize {
    if row.expanded {
        1 + wrap_text(&row.topic.description, row.description_width(width)).len()
    } else {
        1
    }
}

/// Styled lines for one row.
pub fn row_lines(
    row: &TopicRow<'_>,
    width: u16,
    theme: &Theme,
    accent: Color,
    selected: bool,
    on_tour_cursor: bool,
) -> Vec<Line<'static>> {
    let indent = " ".repeat(row.indent());
    let marker = if on_tour_cursor { TOUR_MARKER } else { ' ' };
    let chevron = if row.expanded {
        CHEVRON_EXPANDED
    } else {
        CHEVRON_COLLAPSED
    };

    let title_style = if selected {
        helpers::selected_style(theme)
    } else if row.depth == 0 {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(format!("{marker} "), Style::default().fg(theme.accent)),
        Span::styled(format!("{chevron} "), Style::default().fg(accent)),
        Span::styled(format!("{} ", row.topic.icon.glyph()), Style::default().fg(accent)),
        Span::styled(row.topic.title.clone(), title_style),
    ])];

    if row.expanded {
        let pad = " ".repeat(row.indent() + ROW_PREFIX);
        lines.extend(
            wrap_text(&row.topic.description, row.description_width(width))
                .into_iter()
                .map(|text| {
                    Line::from(vec![
                        Span::raw(pad.clone()),
                        Span::styled(text, theme.text_dim()),
                    ])
                }),
        );
    }
    lines
}

/// First line to draw so that the selected row is fully visible.
///
/// `heights` are the row heights in order; `offset` is the previous scroll
/// position, kept when the selection is already on screen.
pub fn scroll_offset(heights: &[usize], selected: usize, viewport: usize, offset: usize) -> usize {
    let total: usize = heights.iter().sum();
    let Some(&height) = heights.get(selected) else {
        return offset.min(total.saturating_sub(viewport));
    };
    let top: usize = heights[..selected].iter().sum();
    let bottom = top + height;

    let offset = if top < offset {
        top
    } else if bottom > offset + viewport {
        bottom.saturating_sub(viewport).min(top)
    } else {
        offset
    };
    offset.min(total.saturating_sub(viewport))
}

/// Row index drawn at `line` (relative to the list's first visible line).
pub fn row_at_line(heights: &[usize], offset: usize, line: usize) -> Option<usize> {
    let target = offset + line;
    let mut top = 0;
    for (index, height) in heights.iter().enumerate() {
        if target < top + height {
            return Some(index);
        }
        top += height;
    }
    None
}
