use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem},
};

use super::view::{FeedDecoration, PanelView, SuggestionGroup, SuggestionKind};
use crate::theme;

const HISTORY_ICON: &str = "↺";
const REMOVE_CONTROL: &str = "x";
const SELECTED_INDICATOR: &str = "►";

/// Rows needed to show `entries` lines inside a bordered block.
pub fn bordered_height(entries: usize) -> u16 {
    u16::try_from(entries)
        .unwrap_or(u16::MAX)
        .max(1)
        .saturating_add(2)
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let truncated: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    } else {
        text.to_string()
    }
}

fn has_room(area: Rect, what: &str) -> bool {
    if area.width < 8 || area.height < 3 {
        log::error!("No room to render {} in {:?}", what, area);
        return false;
    }
    true
}

/// Render the static panel.
///
/// Returns false when the panel could not be drawn into `area`.
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    view: &PanelView,
    selected: Option<usize>,
) -> bool {
    if view.hidden {
        return true;
    }
    if !has_room(area, "recent queries panel") {
        return false;
    }

    frame.render_widget(Clear, area);

    // Leading indicator, trailing remove control and padding
    let max_text_len = (area.width as usize).saturating_sub(10);

    let items: Vec<ListItem> = if view.items.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "   No recent queries",
            Style::default().fg(theme::panel::EMPTY),
        )))]
    } else {
        view.items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let text = truncate(&item.query, max_text_len);
                let is_selected = selected == Some(idx);
                let bg = if is_selected {
                    theme::panel::ITEM_SELECTED_BG
                } else {
                    theme::panel::BACKGROUND
                };
                let indicator = if is_selected { SELECTED_INDICATOR } else { " " };
                let padding = max_text_len.saturating_sub(text.chars().count());

                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", indicator),
                        Style::default()
                            .fg(theme::panel::ITEM_SELECTED_INDICATOR)
                            .bg(bg),
                    ),
                    Span::styled(
                        format!("{}{} ", text, " ".repeat(padding)),
                        Style::default().fg(theme::panel::ITEM_NORMAL_FG).bg(bg),
                    ),
                    Span::styled(
                        format!("{} ", REMOVE_CONTROL),
                        Style::default().fg(theme::panel::REMOVE_CONTROL).bg(bg),
                    ),
                ]))
            })
            .collect()
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", HISTORY_ICON),
            Style::default().fg(theme::panel::HEADING_ICON),
        ),
        Span::styled(
            format!("{} ", view.caption),
            Style::default()
                .fg(theme::panel::HEADING_FG)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(theme::panel::BORDER))
        .style(Style::default().bg(theme::panel::BACKGROUND));

    frame.render_widget(List::new(items).block(block), area);
    true
}

/// Render the suggestion feed with its post-render decoration applied.
///
/// `selected` indexes query entries only; header lines are not selectable.
pub fn render_feed(
    frame: &mut Frame,
    area: Rect,
    group: &SuggestionGroup,
    decoration: Option<FeedDecoration>,
    selected: Option<usize>,
) -> bool {
    if !has_room(area, "suggestion feed") {
        return false;
    }

    frame.render_widget(Clear, area);

    let max_text_len = (area.width as usize).saturating_sub(6);
    let mut items: Vec<ListItem> = Vec::with_capacity(group.entries.len() + 1);

    if let Some(label) = decoration.and_then(|d| d.suggested_results_label) {
        items.push(ListItem::new(Line::from(Span::styled(
            format!(" {}", label),
            Style::default()
                .fg(theme::feed::SUGGESTED_LABEL)
                .add_modifier(Modifier::BOLD),
        ))));
    }

    let disable_header = decoration.is_some_and(|d| d.disable_recent_header);
    let mut query_idx = 0;
    for entry in &group.entries {
        match entry.kind {
            SuggestionKind::Header => {
                let style = if disable_header {
                    Style::default()
                        .fg(theme::feed::RECENT_HEADER_DISABLED)
                        .add_modifier(Modifier::ITALIC)
                } else {
                    Style::default().fg(theme::feed::ITEM_FG)
                };
                items.push(ListItem::new(Line::from(Span::styled(
                    format!(" {} {}", HISTORY_ICON, entry.label),
                    style,
                ))));
            }
            SuggestionKind::Query => {
                let text = truncate(&entry.label, max_text_len);
                let line = if selected == Some(query_idx) {
                    Line::from(vec![
                        Span::styled(
                            format!(" {} ", SELECTED_INDICATOR),
                            Style::default()
                                .fg(theme::feed::ITEM_SELECTED_INDICATOR)
                                .bg(theme::feed::ITEM_SELECTED_BG),
                        ),
                        Span::styled(
                            text,
                            Style::default()
                                .fg(theme::feed::ITEM_FG)
                                .bg(theme::feed::ITEM_SELECTED_BG),
                        ),
                    ])
                } else {
                    Line::from(Span::styled(
                        format!("   {}", text),
                        Style::default().fg(theme::feed::ITEM_FG),
                    ))
                };
                items.push(ListItem::new(line));
                query_idx += 1;
            }
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Suggestions ")
        .border_style(Style::default().fg(theme::feed::BORDER))
        .style(Style::default().bg(theme::feed::BACKGROUND));

    frame.render_widget(List::new(items).block(block), area);
    true
}

#[cfg(test)]
#[path = "recent_render_tests.rs"]
mod recent_render_tests;
