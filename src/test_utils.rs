//! Shared test utilities for recent-queries
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    use crate::app::App;
    use crate::config::{Config, StorageConfig};
    use crate::host::{AnalyticsEvent, SearchHost};
    use crate::recent::RecentQueries;
    use crate::storage::QueryStorage;

    /// Points both storage backends at files inside `dir`.
    pub fn config_in(dir: &TempDir, config: Config) -> Config {
        Config {
            storage: StorageConfig {
                cookie_jar: Some(dir.path().join("cookies.json")),
                local_storage: Some(dir.path().join("local_storage.json")),
                cookie_domain: config.storage.cookie_domain.clone(),
            },
            ..config
        }
    }

    /// Creates a component whose storage lives inside `dir`.
    pub fn recent_in(dir: &TempDir, config: Config) -> RecentQueries {
        let config = config_in(dir, config);
        let storage = QueryStorage::from_config(&config);
        RecentQueries::new(&config, storage)
    }

    /// Creates an App whose storage lives inside `dir`.
    pub fn app_in(dir: &TempDir, config: Config) -> App {
        let config = config_in(dir, config);
        App::new(&config)
    }

    /// Host that records what the component asked it to do.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub executed: Vec<String>,
        pub events: Vec<AnalyticsEvent>,
    }

    impl SearchHost for RecordingHost {
        fn execute_query(&mut self, query: &str) {
            self.executed.push(query.to_string());
        }

        fn log_custom_event(&mut self, event: &AnalyticsEvent) {
            self.events.push(event.clone());
        }
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
