//! Word list operations.

use crate::error::{Error, Result};
use crate::types::{Gender, Language, Word};
use serde::Deserialize;

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Input of the add-word form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewWord {
    pub text: String,
    #[serde(default)]
    pub translation: Option<String>,
    pub language: Language,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub note: Option<String>,
}

impl NewWord {
    /// Build the stored word. Gender is only kept for languages that use it.
    pub fn into_word(self, id: String, created_at: i64) -> Result<Word> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(Error::EmptyWord);
        }

        Ok(Word {
            id,
            text: text.to_string(),
            translation: non_empty(self.translation.as_deref()),
            language: self.language,
            created_at,
            gender: self.gender.filter(|_| self.language.has_gender()),
            suspended: Some(false),
            note: non_empty(self.note.as_deref()),
        })
    }
}

/// Changes from the inline word editor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordEdit {
    pub text: String,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Newest words go first.
pub fn add(list: &mut Vec<Word>, word: Word) {
    list.insert(0, word);
}

pub fn remove(list: &mut Vec<Word>, id: &str) -> bool {
    let before = list.len();
    list.retain(|w| w.id != id);
    list.len() != before
}

fn find_mut<'a>(list: &'a mut [Word], id: &str) -> Option<&'a mut Word> {
    list.iter_mut().find(|w| w.id == id)
}

/// Flip the suspended ("learned") flag. Returns the new value.
pub fn toggle_suspended(list: &mut [Word], id: &str) -> Option<bool> {
    let word = find_mut(list, id)?;
    let suspended = !word.is_suspended();
    word.suspended = Some(suspended);
    Some(suspended)
}

/// Advance the gender m → f → n → none → m. Returns the new gender.
pub fn cycle_gender(list: &mut [Word], id: &str) -> Option<Option<Gender>> {
    let word = find_mut(list, id)?;
    word.gender = Gender::cycle(word.gender);
    Some(word.gender)
}

/// Apply an edit. An empty text is rejected and leaves the word untouched.
pub fn edit(list: &mut [Word], id: &str, edit: WordEdit) -> Result<bool> {
    let text = edit.text.trim();
    if text.is_empty() {
        return Err(Error::EmptyWord);
    }
    let Some(word) = find_mut(list, id) else {
        return Ok(false);
    };

    word.text = text.to_string();
    word.translation = non_empty(edit.translation.as_deref());
    word.note = non_empty(edit.note.as_deref());
    word.gender = edit.gender;
    Ok(true)
}

/// Words of `language` still in rotation.
pub fn active(list: &[Word], language: Language) -> Vec<&Word> {
    list.iter().filter(|w| w.is_active_in(language)).collect()
}

/// Number of learned (suspended) words of `language`.
pub fn suspended_count(list: &[Word], language: Language) -> usize {
    list.iter()
        .filter(|w| w.language == language && w.is_suspended())
        .count()
}

/// Words of `language` whose text or translation contains `query`,
/// ignoring case, sorted by text.
pub fn search<'a>(list: &'a [Word], language: Language, query: &str) -> Vec<&'a Word> {
    let query = query.trim().to_lowercase();
    let mut matches: Vec<&Word> = list
        .iter()
        .filter(|w| w.language == language)
        .filter(|w| {
            query.is_empty()
                || w.text.to_lowercase().contains(&query)
                || w.translation
                    .as_deref()
                    .map_or(false, |t| t.to_lowercase().contains(&query))
        })
        .collect();

    matches.sort_by(|a, b| {
        a.text
            .to_lowercase()
            .cmp(&b.text.to_lowercase())
            .then_with(|| a.text.cmp(&b.text))
    });
    matches
}
