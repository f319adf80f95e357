//! Error types for wordhoard-core.

use thiserror::Error;

/// Result type alias using the core validation error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when user input cannot become a stored item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("word text is empty")]
    EmptyWord,

    #[error("memoriter title is empty")]
    EmptyTitle,

    #[error("memoriter text is empty")]
    EmptyPassage,

    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("unknown gender code: {0}")]
    UnknownGender(String),
}
