// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_CAPTION: &str = "Recent Queries";
pub const DEFAULT_NUMBER_OF_QUERIES: usize = 5;

/// Persistence backend selection, derived from `use_cookies`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    LocalStorage,
    Cookie,
}

/// Storage location overrides
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub cookie_jar: Option<PathBuf>,
    #[serde(default)]
    pub local_storage: Option<PathBuf>,
    /// Added as a `domain=` attribute on every cookie write
    #[serde(default)]
    pub cookie_domain: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_caption")]
    pub caption: String,
    #[serde(default = "default_number_of_queries")]
    pub number_of_queries: usize,
    #[serde(default)]
    pub is_standalone: bool,
    #[serde(default)]
    pub use_cookies: bool,
    #[serde(default = "default_show_in_query_suggest")]
    pub show_in_query_suggest: bool,
    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_caption() -> String {
    DEFAULT_CAPTION.to_string()
}

fn default_number_of_queries() -> usize {
    DEFAULT_NUMBER_OF_QUERIES
}

fn default_show_in_query_suggest() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            caption: default_caption(),
            number_of_queries: DEFAULT_NUMBER_OF_QUERIES,
            is_standalone: false,
            use_cookies: false,
            show_in_query_suggest: true,
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    pub fn backend(&self) -> StorageBackend {
        if self.use_cookies {
            StorageBackend::Cookie
        } else {
            StorageBackend::LocalStorage
        }
    }

    /// Whether the static panel is a render target.
    ///
    /// The panel and the suggestion feed are independent targets: the panel
    /// exists whenever suggestions are off, and standalone mode forces it on.
    pub fn has_panel(&self) -> bool {
        self.is_standalone || !self.show_in_query_suggest
    }

    /// Replaces a zero `number_of_queries` with the default.
    /// Returns a warning message when a fix was applied.
    pub fn validate(&mut self) -> Option<String> {
        if self.number_of_queries == 0 {
            self.number_of_queries = DEFAULT_NUMBER_OF_QUERIES;
            return Some(format!(
                "number_of_queries must be at least 1, using {}",
                DEFAULT_NUMBER_OF_QUERIES
            ));
        }
        None
    }
}
