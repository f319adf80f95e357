//! Commands invoked by the screens.
//!
//! Every command loads what it needs, applies a core operation and saves
//! the result right away. Save failures are logged and swallowed, so a
//! command only fails on invalid input or a poisoned repository lock.

pub mod activity;
pub mod games;
pub mod memoriter;
pub mod settings;
pub mod words;

use crate::db::date_utils::get_adjusted_today;
use crate::db::{DbError, SettingsRepository, SqliteRepository};
use chrono::NaiveDate;

pub use activity::{activity_history, activity_summary, add_active_time, mark_quiz_answered};
pub use games::{
    answer_quiz, next_practice_card, start_hangman, start_practice, start_quiz,
    start_word_search, submit_word_search,
};
pub use memoriter::{add_memoriter, delete_memoriter, list_memoriters, open_memoriter};
pub use settings::{get_settings, save_settings};
pub use words::{
    add_word, cycle_gender, delete_word, edit_word, list_words, search_words, toggle_suspended,
    word_counts, WordCounts,
};

#[derive(Debug, serde::Serialize, thiserror::Error)]
#[error("{message}")]
pub struct CommandError {
    pub message: String,
}

impl From<DbError> for CommandError {
    fn from(e: DbError) -> Self {
        Self { message: e.to_string() }
    }
}

impl From<wordhoard_core::Error> for CommandError {
    fn from(e: wordhoard_core::Error) -> Self {
        Self { message: e.to_string() }
    }
}

/// Log a failed save without failing the command.
pub(crate) fn persist(result: Result<(), DbError>, what: &str) {
    if let Err(e) = result {
        tracing::error!(error = %e, "failed to save {}", what);
    }
}

/// Activity day in effect now, honouring the configured reset hour.
pub(crate) fn today(repo: &SqliteRepository) -> NaiveDate {
    get_adjusted_today(repo.load_settings().daily_reset_hour)
}
