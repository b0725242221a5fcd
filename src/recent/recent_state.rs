use super::query_list::RecentQueryList;
use super::view::{
    FeedDecoration, PanelAction, PanelItem, PanelView, SUGGESTED_RESULTS_LABEL, SuggestionGroup,
};
use crate::config::Config;
use crate::host::{AnalyticsEvent, SearchHost};
use crate::storage::QueryStorage;

/// The recent queries component.
///
/// Owns the in-memory list and writes it back through the storage adapter
/// after every mutation. The in-memory list stays authoritative when a write
/// fails.
#[derive(Debug)]
pub struct RecentQueries {
    list: RecentQueryList,
    storage: QueryStorage,
    caption: String,
    has_panel: bool,
    show_in_query_suggest: bool,
    visible: bool,
    /// False while a replayed query is in flight, so its success event
    /// doesn't insert the query a second time
    refresh_list: bool,
    suggested_search_exists: bool,
    render_requested: bool,
}

impl RecentQueries {
    /// Creates the component and loads the stored list.
    pub fn new(config: &Config, storage: QueryStorage) -> Self {
        let stored = storage.load();
        let list = RecentQueryList::from_stored(stored, config.number_of_queries);

        #[cfg(debug_assertions)]
        log::debug!(
            "Loaded {} recent queries from {:?} backend",
            list.len(),
            storage.backend()
        );

        let mut component = Self {
            list,
            storage,
            caption: config.caption.clone(),
            has_panel: config.has_panel(),
            show_in_query_suggest: config.show_in_query_suggest,
            visible: false,
            refresh_list: true,
            suggested_search_exists: true,
            render_requested: false,
        };

        if config.is_standalone {
            component.render_requested = true;
            component.visible = !component.list.is_empty();
        }

        component
    }

    /// Adds a query as the most recent entry. Empty input is ignored.
    pub fn insert(&mut self, query: &str) {
        if self.list.insert(query) {
            self.persist();
        }
    }

    /// Removes a query if present. Persists and re-renders either way.
    pub fn remove(&mut self, query: &str) {
        self.list.remove(query);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.list.clear();
        self.persist();
    }

    /// Current list, most recent first.
    pub fn queries(&self) -> &[String] {
        self.list.as_slice()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn shows_suggestions(&self) -> bool {
        self.show_in_query_suggest
    }

    /// Whether the panel is a render target and currently shown.
    pub fn panel_shown(&self) -> bool {
        self.has_panel && self.visible
    }

    pub fn storage(&self) -> &QueryStorage {
        &self.storage
    }

    fn persist(&mut self) {
        self.storage.save(self.list.as_slice());
        self.render_requested = true;
    }

    fn sync_visibility(&mut self) {
        self.visible = !self.list.is_empty();
        self.refresh_list = true;
    }

    /// The host attached the component to its UI: show it when anything is stored.
    pub fn attach(&mut self) {
        self.sync_visibility();
    }

    /// A search finished. Successful searches with results are recorded.
    pub fn on_query_success(&mut self, query: &str, result_count: usize) {
        if self.refresh_list && result_count > 0 {
            self.insert(query);
        }

        // Visibility only depends on whether anything is stored
        self.sync_visibility();
    }

    /// A stored query was clicked: replay it through the host.
    pub fn on_history_click(&mut self, query: &str, host: &mut dyn SearchHost) {
        self.refresh_list = false;
        host.log_custom_event(&AnalyticsEvent::search_from_history(query));
        host.execute_query(query);
        self.insert(query);
    }

    /// The remove control of a panel item was clicked.
    pub fn on_remove_click(&mut self, query: &str) {
        self.remove(query);
    }

    /// Applies an action produced by a [`PanelItem`].
    pub fn apply(&mut self, action: PanelAction, host: &mut dyn SearchHost) {
        match action {
            PanelAction::Replay(query) => self.on_history_click(&query, host),
            PanelAction::Remove(query) => self.on_remove_click(&query),
        }
    }

    /// The suggestion feed asks for entries. Only non-empty typed text gets any.
    pub fn on_populate_suggestions(&mut self, typed_text: &str) -> Option<SuggestionGroup> {
        let group = if typed_text.is_empty() {
            None
        } else {
            self.suggested_search_exists = true;
            Some(SuggestionGroup::from_queries(self.list.iter()))
        };

        self.sync_visibility();
        group
    }

    /// The suggestion service answered with `completion_count` completions.
    pub fn on_suggest_success(&mut self, completion_count: usize) {
        self.suggested_search_exists = completion_count > 0;
    }

    /// The suggestion feed was drawn; returns the adjustments to apply to it.
    pub fn on_suggest_rendered(&self) -> FeedDecoration {
        FeedDecoration {
            disable_recent_header: true,
            suggested_results_label: self
                .suggested_search_exists
                .then_some(SUGGESTED_RESULTS_LABEL),
        }
    }

    /// Panel render instruction, or `None` when the panel is not a render target.
    pub fn panel_view(&self) -> Option<PanelView> {
        if !self.has_panel {
            return None;
        }

        Some(PanelView {
            caption: self.caption.clone(),
            hidden: !self.visible,
            items: self
                .list
                .iter()
                .map(|q| PanelItem {
                    query: q.to_string(),
                })
                .collect(),
        })
    }

    /// Whether a mutation happened since the last [`clear_render_request`](Self::clear_render_request).
    pub fn render_requested(&self) -> bool {
        self.render_requested
    }

    pub fn clear_render_request(&mut self) {
        self.render_requested = false;
    }
}

#[cfg(test)]
#[path = "recent_state_tests.rs"]
mod recent_state_tests;
