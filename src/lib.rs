//! recent-queries library - recent search query tracking
//!
//! Keeps a bounded, de-duplicated, most-recent-first list of executed search
//! queries, persists it to a cookie jar or namespaced local storage, and
//! offers it back as a static panel or as autocomplete suggestions.

pub mod app;
pub mod config;
pub mod error;
pub mod host;
pub mod recent;
pub mod storage;
pub mod theme;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use recent::{RecentQueries, RecentQueryList};
pub use storage::QueryStorage;
