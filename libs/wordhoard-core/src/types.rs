//! Core types for the vocabulary application.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages a word or memoriter can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    De,
    Ru,
    It,
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl Language {
    pub const ALL: [Language; 4] = [Self::En, Self::De, Self::Ru, Self::It];

    /// Get the language code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Ru => "ru",
            Self::It => "it",
        }
    }

    /// Country code used for the flag next to the language.
    pub fn flag_iso_code(&self) -> &'static str {
        match self {
            Self::En => "GB",
            Self::De => "DE",
            Self::Ru => "RU",
            Self::It => "IT",
        }
    }

    /// Whether nouns of this language carry a grammatical gender in the word list.
    pub fn has_gender(&self) -> bool {
        matches!(self, Self::De | Self::Ru)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "de" => Ok(Self::De),
            "ru" => Ok(Self::Ru),
            "it" => Ok(Self::It),
            other => Err(Error::UnknownLanguage(other.to_string())),
        }
    }
}

/// Grammatical gender of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Masculine,
    #[serde(rename = "f")]
    Feminine,
    #[serde(rename = "n")]
    Neuter,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masculine => "m",
            Self::Feminine => "f",
            Self::Neuter => "n",
        }
    }

    /// Next gender in the word-list cycle; `None` after neuter.
    pub fn cycle(current: Option<Gender>) -> Option<Gender> {
        match current {
            None => Some(Self::Masculine),
            Some(Self::Masculine) => Some(Self::Feminine),
            Some(Self::Feminine) => Some(Self::Neuter),
            Some(Self::Neuter) => None,
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Self::Masculine),
            "f" => Ok(Self::Feminine),
            "n" => Ok(Self::Neuter),
            other => Err(Error::UnknownGender(other.to_string())),
        }
    }
}

/// A word stored in the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    /// Foreign-language form.
    pub text: String,
    /// Native-language meaning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    pub language: Language,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspended: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Word {
    /// Suspended words are considered learned and left out of every game.
    pub fn is_suspended(&self) -> bool {
        self.suspended.unwrap_or(false)
    }

    pub fn is_active_in(&self, language: Language) -> bool {
        self.language == language && !self.is_suspended()
    }
}

/// A free-text passage to memorize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memoriter {
    pub id: String,
    pub title: String,
    pub text: String,
    pub language: Language,
    pub created_at: i64,
}

/// Activity counters for a single calendar day. Missing counters read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyActivity {
    pub added_words: u32,
    pub quiz_answers: u32,
    pub active_ms: u64,
}

/// What to do with a word-search candidate that found no free spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnplacedPolicy {
    /// Drop the word and keep placing the remaining candidates.
    Skip,
    /// Stop placing at the first word that does not fit.
    Stop,
}

impl Default for UnplacedPolicy {
    fn default() -> Self {
        Self::Skip
    }
}

/// Word-search generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordSearchSettings {
    pub grid_size: usize,
    pub max_targets: usize,
    pub max_attempts: u32,
    pub unplaced_policy: UnplacedPolicy,
}

impl Default for WordSearchSettings {
    fn default() -> Self {
        Self {
            grid_size: 10,
            max_targets: 10,
            max_attempts: 50,
            unplaced_policy: UnplacedPolicy::default(),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Hour of day (0-23) when a new activity day begins.
    pub daily_reset_hour: u32,
    pub word_search: WordSearchSettings,
    pub memoriter_max_blanks: usize,
    /// Interval of the foreground activity timer.
    pub active_tick_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_reset_hour: 0,
            word_search: WordSearchSettings::default(),
            memoriter_max_blanks: 10,
            active_tick_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn word_json_is_camel_case_without_absent_fields() {
        let json = r#"{"id":"1700000000000","text":"Haus","translation":"ház","language":"de","createdAt":1700000000000,"gender":"n","suspended":false}"#;
        let word: Word = serde_json::from_str(json).unwrap();
        assert_eq!(word.gender, Some(Gender::Neuter));
        assert_eq!(word.language, Language::De);
        assert_eq!(serde_json::to_string(&word).unwrap(), json);
    }

    #[test]
    fn word_without_optional_fields() {
        let json = r#"{"id":"a","text":"cat","language":"en","createdAt":1}"#;
        let word: Word = serde_json::from_str(json).unwrap();
        assert_eq!(word.translation, None);
        assert!(!word.is_suspended());
        assert_eq!(serde_json::to_string(&word).unwrap(), json);
    }

    #[test]
    fn settings_fill_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"dailyResetHour":4}"#).unwrap();
        assert_eq!(settings.daily_reset_hour, 4);
        assert_eq!(settings.word_search, WordSearchSettings::default());
        assert_eq!(settings.memoriter_max_blanks, 10);
    }

    #[test]
    fn daily_activity_fills_missing_counters() {
        let day: DailyActivity = serde_json::from_str(r#"{"addedWords":2}"#).unwrap();
        assert_eq!(
            day,
            DailyActivity {
                added_words: 2,
                quiz_answers: 0,
                active_ms: 0,
            }
        );
    }

    #[test]
    fn language_codes() {
        assert_eq!("ru".parse::<Language>(), Ok(Language::Ru));
        assert_eq!(
            "hu".parse::<Language>(),
            Err(Error::UnknownLanguage("hu".to_string()))
        );
        assert_eq!(Language::It.flag_iso_code(), "IT");
    }

    #[test]
    fn gender_cycle_wraps_through_none() {
        assert_eq!(Gender::cycle(None), Some(Gender::Masculine));
        assert_eq!(Gender::cycle(Some(Gender::Masculine)), Some(Gender::Feminine));
        assert_eq!(Gender::cycle(Some(Gender::Feminine)), Some(Gender::Neuter));
        assert_eq!(Gender::cycle(Some(Gender::Neuter)), None);
    }
}
