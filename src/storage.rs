//! Persistence adapter for the recent query list
//!
//! Two interchangeable strategies store the list as a JSON array of strings:
//! - Cookie jar (`recent_queries` cookie, one month expiry, `path=/`)
//! - Namespaced local storage (`recent-queries.RecentQueries` key)
//!
//! The adapter only knows how to move a list in and out of storage. Ordering,
//! de-duplication and truncation rules belong to the list manager.

pub mod cookie;
pub mod local;

use std::path::PathBuf;

use crate::config::{Config, StorageBackend};
use crate::error::Result;

pub use cookie::CookieStorage;
pub use local::LocalStorage;

const DATA_DIR: &str = "recent-queries";
const COOKIE_JAR_FILE: &str = "cookies.json";
const LOCAL_STORAGE_FILE: &str = "local_storage.json";

/// A storage medium for the serialized list.
///
/// `try_load` returns `Ok(None)` when nothing has been stored yet.
pub trait QueryStore {
    fn try_load(&self) -> Result<Option<Vec<String>>>;
    fn try_save(&mut self, queries: &[String]) -> Result<()>;
}

pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(DATA_DIR))
}

/// Strategy chosen once from configuration, fixed for the component's lifetime.
#[derive(Debug)]
pub enum QueryStorage {
    Cookie(CookieStorage),
    Local(LocalStorage),
}

impl QueryStorage {
    pub fn from_config(config: &Config) -> Self {
        let data_dir = default_data_dir();
        match config.backend() {
            StorageBackend::Cookie => {
                let path = config
                    .storage
                    .cookie_jar
                    .clone()
                    .or_else(|| data_dir.map(|d| d.join(COOKIE_JAR_FILE)));
                QueryStorage::Cookie(CookieStorage::new(
                    path,
                    config.storage.cookie_domain.clone(),
                ))
            }
            StorageBackend::LocalStorage => {
                let path = config
                    .storage
                    .local_storage
                    .clone()
                    .or_else(|| data_dir.map(|d| d.join(LOCAL_STORAGE_FILE)));
                QueryStorage::Local(LocalStorage::new(path))
            }
        }
    }

    pub fn backend(&self) -> StorageBackend {
        match self {
            QueryStorage::Cookie(_) => StorageBackend::Cookie,
            QueryStorage::Local(_) => StorageBackend::LocalStorage,
        }
    }

    fn store(&self) -> &dyn QueryStore {
        match self {
            QueryStorage::Cookie(s) => s,
            QueryStorage::Local(s) => s,
        }
    }

    fn store_mut(&mut self) -> &mut dyn QueryStore {
        match self {
            QueryStorage::Cookie(s) => s,
            QueryStorage::Local(s) => s,
        }
    }

    /// Loads the stored list. Missing or unreadable data yields an empty list.
    pub fn load(&self) -> Vec<String> {
        match self.store().try_load() {
            Ok(Some(queries)) => queries,
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable recent queries ({:?} backend): {}",
                    self.backend(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Best-effort write. Failures are logged and swallowed; the caller's
    /// in-memory list stays authoritative for the session.
    pub fn save(&mut self, queries: &[String]) {
        let backend = self.backend();
        if let Err(e) = self.store_mut().try_save(queries) {
            log::warn!(
                "Failed to persist recent queries ({:?} backend): {}. History will work for this session only.",
                backend,
                e
            );
        }
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
