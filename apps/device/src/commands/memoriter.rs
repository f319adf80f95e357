//! Memoriter commands.

use crate::db::{MemoriterRepository, SettingsRepository};
use crate::state::AppState;
use chrono::Utc;
use uuid::Uuid;
use wordhoard_core::memoriter::{self, new_memoriter};
use wordhoard_core::{Language, Memoriter, MemoriterPlay};

use super::{persist, CommandError};

/// Passages of `language`, newest first.
pub fn list_memoriters(
    state: &AppState,
    language: Language,
) -> Result<Vec<Memoriter>, CommandError> {
    let repo = state.repository()?;
    Ok(repo
        .load_memoriters()
        .into_iter()
        .filter(|m| m.language == language)
        .collect())
}

pub fn add_memoriter(
    state: &AppState,
    title: &str,
    text: &str,
    language: Language,
) -> Result<Memoriter, CommandError> {
    let repo = state.repository()?;
    let item = new_memoriter(
        Uuid::new_v4().to_string(),
        title,
        text,
        language,
        Utc::now().timestamp_millis(),
    )?;

    let mut list = repo.load_memoriters();
    memoriter::add(&mut list, item.clone());
    persist(repo.save_memoriters(&list), "memoriters");

    Ok(item)
}

pub fn delete_memoriter(state: &AppState, id: &str) -> Result<bool, CommandError> {
    let repo = state.repository()?;
    let mut list = repo.load_memoriters();
    let removed = memoriter::remove(&mut list, id);
    if removed {
        persist(repo.save_memoriters(&list), "memoriters");
    }
    Ok(removed)
}

/// Start a blank-filling session. `None` when the passage does not exist.
pub fn open_memoriter(state: &AppState, id: &str) -> Result<Option<MemoriterPlay>, CommandError> {
    let repo = state.repository()?;
    let max_blanks = repo.load_settings().memoriter_max_blanks;
    let list = repo.load_memoriters();
    Ok(memoriter::find(&list, id).map(|item| MemoriterPlay::new(item.clone(), max_blanks)))
}
