//! Word list commands.

use crate::db::{SqliteRepository, WordRepository};
use crate::state::AppState;
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;
use wordhoard_core::words::{self, NewWord, WordEdit};
use wordhoard_core::{ActivityEvent, Gender, Language, Word};

use super::activity::record_event;
use super::{persist, CommandError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCounts {
    pub active: usize,
    pub suspended: usize,
}

fn update<T>(repo: &SqliteRepository, apply: impl FnOnce(&mut Vec<Word>) -> T) -> T {
    let mut list = repo.load_words();
    let result = apply(&mut list);
    persist(repo.save_words(&list), "words");
    result
}

/// Words of `language` in list order, newest first.
pub fn list_words(state: &AppState, language: Language) -> Result<Vec<Word>, CommandError> {
    let repo = state.repository()?;
    Ok(repo
        .load_words()
        .into_iter()
        .filter(|w| w.language == language)
        .collect())
}

pub fn search_words(
    state: &AppState,
    language: Language,
    query: &str,
) -> Result<Vec<Word>, CommandError> {
    let repo = state.repository()?;
    let list = repo.load_words();
    Ok(words::search(&list, language, query)
        .into_iter()
        .cloned()
        .collect())
}

/// Add a word and count it towards today's activity.
pub fn add_word(state: &AppState, input: NewWord) -> Result<Word, CommandError> {
    let repo = state.repository()?;
    let word = input.into_word(Uuid::new_v4().to_string(), Utc::now().timestamp_millis())?;

    update(&repo, |list| words::add(list, word.clone()));
    record_event(&repo, ActivityEvent::WordAdded { count: 1 });
    tracing::info!(id = %word.id, language = %word.language, "word added");

    Ok(word)
}

pub fn delete_word(state: &AppState, id: &str) -> Result<bool, CommandError> {
    let repo = state.repository()?;
    Ok(update(&repo, |list| words::remove(list, id)))
}

/// Returns the new suspended flag, or `None` for an unknown id.
pub fn toggle_suspended(state: &AppState, id: &str) -> Result<Option<bool>, CommandError> {
    let repo = state.repository()?;
    Ok(update(&repo, |list| words::toggle_suspended(list, id)))
}

pub fn cycle_gender(state: &AppState, id: &str) -> Result<Option<Option<Gender>>, CommandError> {
    let repo = state.repository()?;
    Ok(update(&repo, |list| words::cycle_gender(list, id)))
}

pub fn edit_word(state: &AppState, id: &str, edit: WordEdit) -> Result<bool, CommandError> {
    let repo = state.repository()?;
    let mut list = repo.load_words();
    let changed = words::edit(&mut list, id, edit)?;
    if changed {
        persist(repo.save_words(&list), "words");
    }
    Ok(changed)
}

pub fn word_counts(state: &AppState, language: Language) -> Result<WordCounts, CommandError> {
    let repo = state.repository()?;
    let list = repo.load_words();
    Ok(WordCounts {
        active: words::active(&list, language).len(),
        suspended: words::suspended_count(&list, language),
    })
}
