//! Shared fixtures for the device integration tests.

#![allow(dead_code)]

use wordhoard_core::{Gender, Language, NewWord};
use wordhoard_device::db::SqliteRepository;
use wordhoard_device::AppState;

/// Fresh state backed by an in-memory database.
pub fn state() -> AppState {
    AppState::new(SqliteRepository::open_in_memory().expect("in-memory database"))
}

pub fn new_word(text: &str, translation: &str, language: Language) -> NewWord {
    NewWord {
        text: text.to_string(),
        translation: Some(translation.to_string()),
        language,
        ..NewWord::default()
    }
}

pub fn german_noun(text: &str, translation: &str, gender: Gender) -> NewWord {
    NewWord {
        gender: Some(gender),
        ..new_word(text, translation, Language::De)
    }
}
