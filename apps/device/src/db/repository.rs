//! Repository pattern for database access.
//!
//! Loads never fail: a missing, unreadable or unparsable document is
//! reported through `tracing` and replaced by the empty value.

use crate::db::error::DbError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use wordhoard_core::{ActivityLog, Memoriter, Settings, Word};

type Result<T> = std::result::Result<T, DbError>;

/// Storage key of the word list.
pub const WORDS_KEY: &str = "WORDS_2026";
/// Storage key of the memoriter list.
pub const MEMORITERS_KEY: &str = "MEMORITERS_2026";
/// Storage key of the daily activity map.
pub const DAILY_ACTIVITY_KEY: &str = "dailyActivity";
/// Storage key of the settings document.
pub const SETTINGS_KEY: &str = "settings";

/// Repository for the word list.
pub trait WordRepository {
    fn load_words(&self) -> Vec<Word>;
    fn save_words(&self, words: &[Word]) -> Result<()>;
}

/// Repository for the memoriter list.
pub trait MemoriterRepository {
    fn load_memoriters(&self) -> Vec<Memoriter>;
    fn save_memoriters(&self, items: &[Memoriter]) -> Result<()>;
}

/// Repository for daily activity records.
pub trait ActivityRepository {
    fn load_daily_activity(&self) -> ActivityLog;
    fn save_daily_activity(&self, log: &ActivityLog) -> Result<()>;
}

/// Repository for settings.
pub trait SettingsRepository {
    fn load_settings(&self) -> Settings;
    fn save_settings(&self, settings: &Settings) -> Result<()>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_SCHEMA_VERSION)?;

        let version: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| row.get(0))?;
        if version != super::schema::SCHEMA_VERSION {
            tracing::warn!(
                found = version,
                expected = super::schema::SCHEMA_VERSION,
                "unexpected schema version"
            );
        }
        Ok(())
    }

    /// Raw document stored under `key`.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    /// Store a raw document under `key`, replacing any previous one.
    pub fn put_value(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    /// Delete the document under `key`.
    pub fn remove_value(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_value(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| DbError::InvalidData {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.read_json(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to load stored value, using empty default");
                T::default()
            }
        }
    }

    fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|source| DbError::InvalidData {
            key: key.to_string(),
            source,
        })?;
        self.put_value(key, &raw)
    }
}

impl WordRepository for SqliteRepository {
    fn load_words(&self) -> Vec<Word> {
        self.load_or_default(WORDS_KEY)
    }

    fn save_words(&self, words: &[Word]) -> Result<()> {
        self.save_json(WORDS_KEY, words)
    }
}

impl MemoriterRepository for SqliteRepository {
    fn load_memoriters(&self) -> Vec<Memoriter> {
        self.load_or_default(MEMORITERS_KEY)
    }

    fn save_memoriters(&self, items: &[Memoriter]) -> Result<()> {
        self.save_json(MEMORITERS_KEY, items)
    }
}

impl ActivityRepository for SqliteRepository {
    fn load_daily_activity(&self) -> ActivityLog {
        self.load_or_default(DAILY_ACTIVITY_KEY)
    }

    fn save_daily_activity(&self, log: &ActivityLog) -> Result<()> {
        self.save_json(DAILY_ACTIVITY_KEY, log)
    }
}

impl SettingsRepository for SqliteRepository {
    fn load_settings(&self) -> Settings {
        self.load_or_default(SETTINGS_KEY)
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.save_json(SETTINGS_KEY, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use wordhoard_core::{ActivityEvent, Gender, Language};

    fn repo() -> SqliteRepository {
        SqliteRepository::open_in_memory().unwrap()
    }

    fn word(id: &str) -> Word {
        Word {
            id: id.to_string(),
            text: "Hund".to_string(),
            translation: Some("kutya".to_string()),
            language: Language::De,
            created_at: 1_700_000_000_000,
            gender: Some(Gender::Masculine),
            suspended: Some(false),
            note: None,
        }
    }

    #[test]
    fn empty_store_loads_empty_collections() {
        let repo = repo();
        assert!(repo.load_words().is_empty());
        assert!(repo.load_memoriters().is_empty());
        assert!(repo.load_daily_activity().is_empty());
        assert_eq!(repo.load_settings(), Settings::default());
    }

    #[test]
    fn words_round_trip() {
        let repo = repo();
        let words = vec![word("1"), word("2")];
        repo.save_words(&words).unwrap();
        assert_eq!(repo.load_words(), words);
    }

    #[test]
    fn memoriters_round_trip() {
        let repo = repo();
        let items = vec![Memoriter {
            id: "m".to_string(),
            title: "Gedicht".to_string(),
            text: "Über allen Gipfeln ist Ruh".to_string(),
            language: Language::De,
            created_at: 5,
        }];
        repo.save_memoriters(&items).unwrap();
        assert_eq!(repo.load_memoriters(), items);
    }

    #[test]
    fn activity_round_trip() {
        let repo = repo();
        let mut log = ActivityLog::new();
        log.record(
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            ActivityEvent::ActiveTime { ms: 20_000 },
        );
        repo.save_daily_activity(&log).unwrap();
        assert_eq!(repo.load_daily_activity(), log);
    }

    #[test]
    fn stored_words_are_camel_case_json() {
        let repo = repo();
        repo.save_words(&[word("1")]).unwrap();
        let raw = repo.get_value(WORDS_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""createdAt":1700000000000"#));
        assert!(raw.contains(r#""gender":"m""#));
    }

    #[test]
    fn corrupt_document_degrades_to_empty() {
        let repo = repo();
        repo.put_value(WORDS_KEY, "{not json").unwrap();
        repo.put_value(MEMORITERS_KEY, r#"{"id":"not a list"}"#).unwrap();
        repo.put_value(DAILY_ACTIVITY_KEY, "[]").unwrap();
        assert!(repo.load_words().is_empty());
        assert!(repo.load_memoriters().is_empty());
        assert!(repo.load_daily_activity().is_empty());
    }

    #[test]
    fn save_overwrites_previous_value() {
        let repo = repo();
        repo.save_words(&[word("1"), word("2")]).unwrap();
        repo.save_words(&[word("3")]).unwrap();
        assert_eq!(repo.load_words(), vec![word("3")]);

        repo.remove_value(WORDS_KEY).unwrap();
        assert!(repo.load_words().is_empty());
    }

    #[test]
    fn reopening_file_keeps_data() {
        let path = std::env::temp_dir().join(format!("wordhoard-{}.db", uuid::Uuid::new_v4()));
        {
            let repo = SqliteRepository::open(&path).unwrap();
            repo.save_words(&[word("1")]).unwrap();
        }
        let repo = SqliteRepository::open(&path).unwrap();
        assert_eq!(repo.load_words(), vec![word("1")]);
        drop(repo);
        std::fs::remove_file(&path).ok();
    }
}
