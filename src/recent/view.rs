//! Render instructions handed to the rendering collaborator.
//!
//! Views carry plain data only. Click handling goes back through
//! [`PanelAction`] values that capture nothing but the query text.

/// Fixed label of the suggestion feed header line.
pub const RECENT_QUERIES_LABEL: &str = "Recent Queries";

/// Label inserted at the top of the feed when the suggestion service has results.
pub const SUGGESTED_RESULTS_LABEL: &str = "Suggested Search Results";

/// Static panel: heading caption plus one item per stored query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub caption: String,
    pub hidden: bool,
    pub items: Vec<PanelItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelItem {
    pub query: String,
}

impl PanelItem {
    /// Action for a click on the item itself.
    pub fn replay(&self) -> PanelAction {
        PanelAction::Replay(self.query.clone())
    }

    /// Action for a click on the item's remove control.
    pub fn remove(&self) -> PanelAction {
        PanelAction::Remove(self.query.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    Replay(String),
    Remove(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// Non-selectable heading line
    Header,
    Query,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub label: String,
    /// Text placed in the query box when the suggestion is picked
    pub text: String,
}

/// Suggestions contributed to the autocomplete feed: header first, then queries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionGroup {
    pub entries: Vec<Suggestion>,
}

impl SuggestionGroup {
    pub fn from_queries<'a>(queries: impl IntoIterator<Item = &'a str>) -> Self {
        let mut entries = vec![Suggestion {
            kind: SuggestionKind::Header,
            label: RECENT_QUERIES_LABEL.to_string(),
            text: String::new(),
        }];
        entries.extend(queries.into_iter().map(|q| Suggestion {
            kind: SuggestionKind::Query,
            label: q.to_string(),
            text: q.to_string(),
        }));
        Self { entries }
    }

    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|s| s.kind == SuggestionKind::Query)
            .map(|s| s.text.as_str())
    }
}

/// Post-render adjustments to the suggestion feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedDecoration {
    /// The "Recent Queries" header line must not be selectable
    pub disable_recent_header: bool,
    /// Label line to insert at the top of the feed, if any
    pub suggested_results_label: Option<&'static str>,
}
