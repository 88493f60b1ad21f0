//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the roadmap layout (header, phase bar, banner, topics, tip, footer)
//! - Apply the phase transition slide to the banner
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for the list scroll offset and last area)

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::app::layout::{AppLayout, RESTART_BUTTON};
use crate::content::Phase;
use crate::tour::TourStatus;
use crate::ui::outline::{APP_SUBTITLE, APP_TITLE};
use crate::ui::roadmap::{row_height, row_lines, scroll_offset};
use crate::ui::theme::{ThemeExt, helpers};

const KEY_HINTS: &str =
    " 1-4 stage  ←/→ cycle  ↑/↓ select  ⏎ toggle  r restart  s stop  t theme  q quit";

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let layout = AppLayout::calculate(f.area());

        f.render_widget(
            Block::default().style(Style::default().bg(self.theme.background)),
            f.area(),
        );

        self.render_header(f, layout.header);
        self.render_phase_bar(f, &layout);
        self.render_banner(f, layout.banner);
        self.render_topics(f, &layout);
        self.render_tip(f, layout.tip);
        self.render_footer(f, &layout);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(APP_TITLE, self.theme.title())),
            Line::from(Span::styled(APP_SUBTITLE, self.theme.text_dim())),
        ])
        .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    fn render_phase_bar(&self, f: &mut Frame, layout: &AppLayout) {
        let active = self.machine.active_phase();
        let content = self.machine.content();

        for (phase, area) in Phase::ALL.into_iter().zip(layout.phase_buttons) {
            let section = content.phase(phase);
            let is_active = phase == active;
            let border_style = if is_active {
                Style::default().fg(self.theme.phase_accent(phase))
            } else {
                self.theme.border()
            };

            let button = Paragraph::new(vec![
                Line::from(format!("{} Stage {}", section.icon.glyph(), phase.stage())),
                Line::from(section.label.clone()),
            ])
            .alignment(Alignment::Center)
            .style(self.theme.phase_button(phase, is_active))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            f.render_widget(button, area);
        }
    }

    fn render_banner(&self, f: &mut Frame, area: Rect) {
        let phase = self.machine.active_phase();
        let section = self.machine.content().phase(phase);
        let accent = self.theme.phase_accent(phase);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                format!(" {} ", section.heading),
                helpers::phase_heading_style(&self.theme, phase),
            ));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let (offset, style) = match self.transition {
            Some(transition) => (transition.offset(), self.theme.text_dim()),
            None => (0, Style::default().fg(accent)),
        };
        let shifted = Rect {
            x: inner.x + offset.min(inner.width),
            width: inner.width.saturating_sub(offset),
            ..inner
        };
        let summary = Paragraph::new(section.summary.clone())
            .style(style)
            .wrap(Wrap { trim: true });
        f.render_widget(summary, shifted);
    }

    fn render_topics(&mut self, f: &mut Frame, layout: &AppLayout) {
        let phase = self.machine.active_phase();
        let accent = self.theme.phase_accent(phase);
        let inner = layout.topics_inner;
        let state = self.machine.state();
        let touring = self.machine.status() == TourStatus::Touring;

        let (offset, lines) = {
            let rows = self.visible_rows();
            let heights: Vec<usize> = rows.iter().map(|row| row_height(row, inner.width)).collect();
            let offset = scroll_offset(
                &heights,
                self.selected,
                usize::from(inner.height),
                self.list_offset,
            );
            let lines: Vec<Line<'static>> = rows
                .iter()
                .enumerate()
                .flat_map(|(index, row)| {
                    let on_cursor = touring && row.depth == 0 && row.top_index == state.cursor;
                    row_lines(
                        row,
                        inner.width,
                        &self.theme,
                        accent,
                        index == self.selected,
                        on_cursor,
                    )
                })
                .collect();
            (offset, lines)
        };

        let title = format!(" {} ", self.machine.content().phase(phase).label);
        let list = Paragraph::new(lines)
            .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border())
                    .title(Span::styled(title, self.theme.title())),
            );
        f.render_widget(list, layout.topics);
        self.list_offset = offset;
    }

    fn render_tip(&self, f: &mut Frame, area: Rect) {
        let section = self.machine.content().phase(self.machine.active_phase());
        let tip = Paragraph::new(section.tip.clone())
            .style(self.theme.text())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border())
                    .title(Span::styled(
                        " Profile tip ",
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    )),
            );
        f.render_widget(tip, area);
    }

    fn render_footer(&self, f: &mut Frame, layout: &AppLayout) {
        let status = format!(
            " {} · {} ",
            self.tour_status_label(),
            self.color_theme.display_name()
        );
        let status_width = status.chars().count() as u16;

        let footer = layout.footer;
        let rest = Rect {
            x: layout.restart_button.right(),
            width: footer.width.saturating_sub(layout.restart_button.width),
            ..footer
        };
        let [hints_area, status_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(status_width)])
            .areas(rest);

        f.render_widget(
            Paragraph::new(RESTART_BUTTON).style(helpers::primary_button_style(&self.theme)),
            layout.restart_button,
        );
        f.render_widget(
            Paragraph::new(KEY_HINTS).style(helpers::muted_style(&self.theme)),
            hints_area,
        );

        let status_style = match self.machine.status() {
            TourStatus::Touring => Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
            TourStatus::Idle => self.theme.text(),
        };
        f.render_widget(
            Paragraph::new(status)
                .style(status_style)
                .alignment(Alignment::Right),
            status_area,
        );
    }
}
