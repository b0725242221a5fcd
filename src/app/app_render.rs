use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::recent::recent_render::{bordered_height, render_feed, render_panel};
use crate::theme;

const INPUT_HEIGHT: u16 = 3;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_input(frame, layout[0]);
        self.render_body(frame, layout[1]);
        self.render_help_line(frame, layout[2]);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Search ")
                .border_style(Style::default().fg(theme::input::BORDER))
                .style(Style::default().bg(theme::input::BACKGROUND)),
        );
        self.input.set_style(
            Style::default()
                .fg(theme::input::TEXT)
                .bg(theme::input::BACKGROUND),
        );
        frame.render_widget(&self.input, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        if self.feed_visible()
            && let Some(group) = &self.feed
        {
            let label_rows = self
                .decoration
                .and_then(|d| d.suggested_results_label)
                .map_or(0, |_| 1);
            let height = bordered_height(group.entries.len() + label_rows).min(area.height);
            let feed_area = Rect { height, ..area };
            render_feed(frame, feed_area, group, self.decoration, self.selected);
            return;
        }

        if let Some(view) = self.recent.panel_view() {
            let height = bordered_height(view.items.len()).min(area.height);
            let panel_area = Rect { height, ..area };
            render_panel(frame, panel_area, &view, self.selected);
        }
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(warning) = &self.warning {
            Line::from(Span::styled(
                format!(" {}", warning),
                Style::default().fg(theme::help_line::WARNING),
            ))
        } else {
            let hints = [
                ("Enter", "search"),
                ("↑/↓", "select"),
                ("Ctrl+D", "remove"),
                ("Esc", "quit"),
            ];
            let mut spans = Vec::with_capacity(hints.len() * 2);
            for (key, description) in hints {
                spans.push(Span::styled(
                    format!(" {}", key),
                    Style::default().fg(theme::help_line::KEY),
                ));
                spans.push(Span::styled(
                    format!(" {} ", description),
                    Style::default().fg(theme::help_line::DESCRIPTION),
                ));
            }
            Line::from(spans)
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
