//! Host collaborator interface
//!
//! The component never executes searches or ships analytics itself. It asks
//! the host through this trait, which keeps the core free of global state.

use std::collections::BTreeMap;

use serde::Serialize;

pub const SEARCH_FROM_HISTORY: &str = "searchFromHistory";
pub const CUSTOM_EVENT_TYPE: &str = "customEventType";

/// Custom analytics event emitted when a stored query is replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub metadata: BTreeMap<String, String>,
}

impl AnalyticsEvent {
    pub fn search_from_history(query: &str) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert("queryHistory".to_string(), query.to_string());
        Self {
            name: SEARCH_FROM_HISTORY.to_string(),
            event_type: CUSTOM_EVENT_TYPE.to_string(),
            metadata,
        }
    }
}

pub trait SearchHost {
    /// Re-issues a search with `query` as the query text.
    fn execute_query(&mut self, query: &str);

    fn log_custom_event(&mut self, event: &AnalyticsEvent);
}
