//! Database error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid stored value under {key}: {source}")]
    InvalidData {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
