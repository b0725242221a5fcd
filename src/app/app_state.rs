use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::config::Config;
use crate::host::{AnalyticsEvent, SearchHost};
use crate::recent::view::{FeedDecoration, SuggestionGroup};
use crate::recent::{EventResponse, RecentQueries, SearchEvent};
use crate::storage::QueryStorage;
use crate::theme;

/// Terminal side of the host collaborator.
///
/// There is no search engine behind the terminal: executing a query means
/// handing it back to the shell once the UI closes.
#[derive(Debug, Default)]
pub struct TerminalHost {
    pub pending_query: Option<String>,
    pub events: Vec<AnalyticsEvent>,
}

impl SearchHost for TerminalHost {
    fn execute_query(&mut self, query: &str) {
        self.pending_query = Some(query.to_string());
    }

    fn log_custom_event(&mut self, event: &AnalyticsEvent) {
        match serde_json::to_string(event) {
            Ok(json) => log::info!("analytics event: {}", json),
            Err(e) => log::warn!("Failed to serialize analytics event {}: {}", event.name, e),
        }
        self.events.push(event.clone());
    }
}

fn create_query_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea
}

pub struct App {
    pub recent: RecentQueries,
    pub input: TextArea<'static>,
    pub host: TerminalHost,
    /// Index into [`App::selectable_queries`]; `None` while typing
    pub selected: Option<usize>,
    pub feed: Option<SuggestionGroup>,
    pub decoration: Option<FeedDecoration>,
    pub warning: Option<String>,
    pub should_quit: bool,
    dirty: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let storage = QueryStorage::from_config(config);
        Self::with_component(RecentQueries::new(config, storage))
    }

    pub fn with_component(mut recent: RecentQueries) -> Self {
        recent.attach();
        Self {
            recent,
            input: create_query_textarea(),
            host: TerminalHost::default(),
            selected: None,
            feed: None,
            decoration: None,
            warning: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Query to print after the terminal is restored, if one was executed.
    pub fn output(&self) -> Option<&str> {
        self.host.pending_query.as_deref()
    }

    pub fn query(&self) -> &str {
        self.input.lines().first().map(|s| s.as_str()).unwrap_or("")
    }

    pub fn feed_visible(&self) -> bool {
        self.recent.shows_suggestions() && !self.query().is_empty() && self.feed.is_some()
    }

    /// Queries the selection moves over: the feed when shown, otherwise the
    /// panel when shown. Nothing is selectable while both are hidden.
    pub fn selectable_queries(&self) -> Vec<String> {
        match &self.feed {
            Some(group) if self.feed_visible() => group.queries().map(String::from).collect(),
            _ if self.recent.panel_shown() => self.recent.queries().to_vec(),
            _ => Vec::new(),
        }
    }

    pub fn selected_query(&self) -> Option<String> {
        self.selected
            .and_then(|idx| self.selectable_queries().get(idx).cloned())
    }

    /// Runs the suggestion feed event sequence for the current query text.
    pub fn refresh_feed(&mut self) {
        let typed_text = self.query().to_string();
        self.feed = match self.recent.handle(SearchEvent::PopulateSuggestions {
            typed_text: &typed_text,
        }) {
            EventResponse::Suggestions(group) => Some(group),
            _ => None,
        };

        // No completion service behind the terminal host
        self.recent.handle(SearchEvent::SuggestSuccess {
            completion_count: 0,
        });

        self.decoration = match self.recent.handle(SearchEvent::SuggestRendered) {
            EventResponse::Decorate(decoration) if self.feed.is_some() => Some(decoration),
            _ => None,
        };
        self.mark_dirty();
    }

    pub fn should_render(&self) -> bool {
        self.dirty || self.recent.render_requested()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
        self.recent.clear_render_request();
    }
}
