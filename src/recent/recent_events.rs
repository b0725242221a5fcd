use super::recent_state::RecentQueries;
use super::view::{FeedDecoration, SuggestionGroup};

/// Inbound events from the host search framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent<'a> {
    /// A search completed
    QuerySuccess { query: &'a str, result_count: usize },
    /// The suggestion feed is being populated for the typed text
    PopulateSuggestions { typed_text: &'a str },
    /// The suggestion service answered
    SuggestSuccess { completion_count: usize },
    /// The suggestion feed finished drawing
    SuggestRendered,
}

impl SearchEvent<'_> {
    fn is_suggestion_event(&self) -> bool {
        !matches!(self, SearchEvent::QuerySuccess { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse {
    None,
    Suggestions(SuggestionGroup),
    Decorate(FeedDecoration),
}

impl RecentQueries {
    /// Routes an event to its handler.
    ///
    /// Suggestion feed events are only handled when `show_in_query_suggest`
    /// is enabled.
    pub fn handle(&mut self, event: SearchEvent<'_>) -> EventResponse {
        if event.is_suggestion_event() && !self.shows_suggestions() {
            return EventResponse::None;
        }

        match event {
            SearchEvent::QuerySuccess {
                query,
                result_count,
            } => {
                self.on_query_success(query, result_count);
                EventResponse::None
            }
            SearchEvent::PopulateSuggestions { typed_text } => self
                .on_populate_suggestions(typed_text)
                .map_or(EventResponse::None, EventResponse::Suggestions),
            SearchEvent::SuggestSuccess { completion_count } => {
                self.on_suggest_success(completion_count);
                EventResponse::None
            }
            SearchEvent::SuggestRendered => EventResponse::Decorate(self.on_suggest_rendered()),
        }
    }
}
