//! Flashcard practice deck.

use crate::types::{Gender, Language, Word};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// German definite article for a gender.
pub fn article(language: Language, gender: Option<Gender>) -> Option<&'static str> {
    match (language, gender?) {
        (Language::De, Gender::Masculine) => Some("der"),
        (Language::De, Gender::Feminine) => Some("die"),
        (Language::De, Gender::Neuter) => Some("das"),
        _ => None,
    }
}

/// Split a Russian word into its base and last letter, which carries the
/// gender hint and is highlighted on the card.
pub fn split_ending(word: &str) -> (&str, &str) {
    match word.char_indices().last() {
        Some((idx, _)) => word.split_at(idx),
        None => (word, ""),
    }
}

/// Front face of a flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFront {
    pub article: Option<&'static str>,
    pub base: String,
    pub ending: String,
    pub gender: Option<Gender>,
    /// Russian word ending in a soft sign.
    pub soft_sign: bool,
}

impl CardFront {
    pub fn for_word(word: &Word) -> Self {
        let (base, ending) = if word.language == Language::Ru {
            split_ending(&word.text)
        } else {
            (word.text.as_str(), "")
        };

        Self {
            article: article(word.language, word.gender),
            base: base.to_string(),
            ending: ending.to_string(),
            gender: word.gender,
            soft_sign: word.language == Language::Ru && word.text.ends_with('ь'),
        }
    }
}

/// Shuffled deck of translated words, browsed with wrap-around.
#[derive(Debug, Clone, Serialize)]
pub struct PracticeDeck {
    words: Vec<Word>,
    index: usize,
}

impl PracticeDeck {
    /// Active words of `language` that have a translation, shuffled.
    pub fn new<R: Rng + ?Sized>(words: &[Word], language: Language, rng: &mut R) -> Self {
        let mut words: Vec<Word> = words
            .iter()
            .filter(|w| w.is_active_in(language))
            .filter(|w| w.translation.as_deref().map_or(false, |t| !t.is_empty()))
            .cloned()
            .collect();
        words.shuffle(rng);
        Self { words, index: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Zero-based position of the current card.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.index)
    }

    pub fn front(&self) -> Option<CardFront> {
        self.current().map(CardFront::for_word)
    }

    pub fn back(&self) -> Option<&str> {
        self.current().and_then(|w| w.translation.as_deref())
    }

    /// Move to the next card. Returns `false` for an empty deck.
    pub fn next_card(&mut self) -> bool {
        if self.words.is_empty() {
            return false;
        }
        self.index = (self.index + 1) % self.words.len();
        true
    }

    pub fn previous_card(&mut self) -> bool {
        if self.words.is_empty() {
            return false;
        }
        self.index = (self.index + self.words.len() - 1) % self.words.len();
        true
    }
}
