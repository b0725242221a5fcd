use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecentQueriesError {
    #[error("Could not determine data directory for recent queries storage")]
    NoDataDir,

    #[error("Invalid persisted data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecentQueriesError>;
