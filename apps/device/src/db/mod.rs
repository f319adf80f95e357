//! Local SQLite storage.

pub mod date_utils;
pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{
    ActivityRepository, MemoriterRepository, SettingsRepository, SqliteRepository,
    WordRepository, DAILY_ACTIVITY_KEY, MEMORITERS_KEY, SETTINGS_KEY, WORDS_KEY,
};
