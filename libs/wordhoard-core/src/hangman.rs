//! Hangman over the word list.

use crate::types::{Language, Word};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeSet;

/// Wrong guesses allowed before the game is lost.
pub const MAX_WRONG_GUESSES: u32 = 12;

/// Word used when the list has nothing playable.
pub const FALLBACK_WORD: &str = "EXAMPLE";

/// Longest playable word is one shorter than this.
const MAX_WORD_LEN: usize = 10;

/// On-screen keyboard letters for a language.
pub fn keyboard(language: Language) -> &'static str {
    match language {
        Language::Ru => "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ",
        Language::De => "ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÜß",
        Language::En | Language::It => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    }
}

/// Upper-cased form of `text` if it can be played with the language keyboard.
pub fn playable_form(text: &str, language: Language) -> Option<String> {
    let keys = keyboard(language);
    // to_uppercase() turns ß into SS, so upper-case letter by letter.
    let upper: String = text
        .trim()
        .chars()
        .map(|c| if c == 'ß' { c } else { c.to_uppercase().next().unwrap_or(c) })
        .collect();
    let len = upper.chars().count();

    if len > 0 && len < MAX_WORD_LEN && upper.chars().all(|c| keys.contains(c)) {
        Some(upper)
    } else {
        None
    }
}

/// Pick the next word, avoiding `previous` when there is another choice.
pub fn pick_word<R: Rng + ?Sized>(
    words: &[Word],
    language: Language,
    previous: Option<&str>,
    rng: &mut R,
) -> String {
    let playable: Vec<String> = words
        .iter()
        .filter(|w| w.is_active_in(language))
        .filter_map(|w| playable_form(&w.text, language))
        .collect();

    let fresh: Vec<&String> = playable
        .iter()
        .filter(|w| Some(w.as_str()) != previous)
        .collect();
    let candidates = if fresh.is_empty() {
        playable.iter().collect()
    } else {
        fresh
    };

    candidates
        .choose(rng)
        .map(|w| w.to_string())
        .unwrap_or_else(|| FALLBACK_WORD.to_string())
}

/// Result of pressing a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    Hit,
    Miss,
    /// Letter was already guessed.
    Repeated,
    /// The game is over.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hangman {
    word: Vec<char>,
    guessed: BTreeSet<char>,
    wrong: u32,
}

impl Hangman {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.chars().collect(),
            guessed: BTreeSet::new(),
            wrong: 0,
        }
    }

    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    pub fn wrong_guesses(&self) -> u32 {
        self.wrong
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    pub fn status(&self) -> GameStatus {
        if self.word.iter().all(|c| self.guessed.contains(c)) {
            GameStatus::Won
        } else if self.wrong >= MAX_WRONG_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.status() != GameStatus::Playing {
            return GuessOutcome::Ignored;
        }
        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated;
        }
        if self.word.contains(&letter) {
            GuessOutcome::Hit
        } else {
            self.wrong += 1;
            GuessOutcome::Miss
        }
    }

    /// The word with unguessed letters shown as `None`.
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.word
            .iter()
            .map(|c| self.guessed.contains(c).then_some(*c))
            .collect()
    }

    /// The word as shown on screen, `_` for hidden letters.
    pub fn masked(&self) -> String {
        self.revealed()
            .into_iter()
            .map(|c| c.unwrap_or('_'))
            .collect()
    }
}
