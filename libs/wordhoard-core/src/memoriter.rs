//! Memoriter play: blank out words of a passage and grade the recall.

use crate::error::{Error, Result};
use crate::types::{Language, Memoriter};
use serde::Serialize;
use std::collections::HashMap;

/// Default number of words hidden per passage.
pub const DEFAULT_MAX_BLANKS: usize = 10;

/// Letter-only form of a token, used as the blank key.
pub fn normalize(token: &str) -> String {
    token.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Choose the words of `text` to hide.
///
/// Distinct letter-only forms of the whitespace tokens, longest first.
/// Equal lengths keep their order of first appearance.
pub fn pick_blanks(text: &str, max_blanks: usize) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for token in text.split_whitespace() {
        let plain = normalize(token);
        if !plain.is_empty() && !unique.contains(&plain) {
            unique.push(plain);
        }
    }

    // sort_by is stable
    unique.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    unique.truncate(max_blanks);
    unique
}

/// A piece of a rendered passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Shown as is, including whitespace runs.
    Text { text: String },
    /// An input slot; `key` is shared by every occurrence of the word.
    Blank { key: String, text: String },
}

/// Split `text` into segments, keeping whitespace so the passage can be
/// reproduced exactly.
pub fn render_passage(text: &str, blanks: &[String]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        if in_space.map_or(false, |prev| prev != space) {
            segments.push(segment(&text[start..idx], blanks));
            start = idx;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        segments.push(segment(&text[start..], blanks));
    }

    segments
}

fn segment(piece: &str, blanks: &[String]) -> Segment {
    let key = normalize(piece);
    if !key.is_empty() && blanks.contains(&key) {
        Segment::Blank {
            key,
            text: piece.to_string(),
        }
    } else {
        Segment::Text {
            text: piece.to_string(),
        }
    }
}

/// Lenient comparison of a typed answer with the hidden word.
///
/// Case is ignored and surrounding whitespace trimmed. An answer counts when
/// it equals the word or one contains the other, so a dropped or extra
/// ending still scores.
pub fn is_lenient_match(expected: &str, answer: &str) -> bool {
    let expected = expected.to_lowercase();
    let answer = answer.trim().to_lowercase();
    !answer.is_empty()
        && (answer == expected || expected.contains(&answer) || answer.contains(&expected))
}

/// Number of blanks answered correctly.
pub fn grade(blanks: &[String], answers: &HashMap<String, String>) -> usize {
    blanks
        .iter()
        .filter(|blank| {
            answers
                .get(blank.as_str())
                .map_or(false, |answer| is_lenient_match(blank, answer))
        })
        .count()
}

/// Where a play session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Answering,
    Checked { score: usize },
}

/// A memoriter being played.
///
/// Blanks are picked once when the session starts and stay fixed until it
/// is dropped; resetting only clears the answers.
#[derive(Debug, Clone, Serialize)]
pub struct MemoriterPlay {
    passage: Memoriter,
    blanks: Vec<String>,
    answers: HashMap<String, String>,
    phase: Phase,
}

impl MemoriterPlay {
    pub fn new(passage: Memoriter, max_blanks: usize) -> Self {
        let blanks = pick_blanks(&passage.text, max_blanks);
        Self {
            passage,
            blanks,
            answers: HashMap::new(),
            phase: Phase::Answering,
        }
    }

    pub fn passage(&self) -> &Memoriter {
        &self.passage
    }

    pub fn blanks(&self) -> &[String] {
        &self.blanks
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn answer(&self, key: &str) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }

    pub fn segments(&self) -> Vec<Segment> {
        render_passage(&self.passage.text, &self.blanks)
    }

    /// Store the typed answer for a blank. Ignored once checked or for
    /// keys that are not blanks.
    pub fn set_answer(&mut self, key: &str, value: impl Into<String>) -> bool {
        if self.phase != Phase::Answering || !self.blanks.iter().any(|b| b == key) {
            return false;
        }
        self.answers.insert(key.to_string(), value.into());
        true
    }

    /// Grade the answers and move to `Checked`. Checking twice keeps the
    /// first score.
    pub fn check(&mut self) -> usize {
        match self.phase {
            Phase::Checked { score } => score,
            Phase::Answering => {
                let score = grade(&self.blanks, &self.answers);
                self.phase = Phase::Checked { score };
                score
            }
        }
    }

    /// Clear answers and score and go back to answering.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.phase = Phase::Answering;
    }

    pub fn score(&self) -> Option<usize> {
        match self.phase {
            Phase::Checked { score } => Some(score),
            Phase::Answering => None,
        }
    }

    pub fn max_score(&self) -> usize {
        self.blanks.len()
    }
}

/// Build a new memoriter from editor input.
pub fn new_memoriter(
    id: String,
    title: &str,
    text: &str,
    language: Language,
    created_at: i64,
) -> Result<Memoriter> {
    let title = title.trim();
    let text = text.trim();
    if title.is_empty() {
        return Err(Error::EmptyTitle);
    }
    if text.is_empty() {
        return Err(Error::EmptyPassage);
    }

    Ok(Memoriter {
        id,
        title: title.to_string(),
        text: text.to_string(),
        language,
        created_at,
    })
}

/// Insert at the front so the newest passage is listed first.
pub fn add(list: &mut Vec<Memoriter>, item: Memoriter) {
    list.insert(0, item);
}

/// Remove by id. Returns whether anything was removed.
pub fn remove(list: &mut Vec<Memoriter>, id: &str) -> bool {
    let before = list.len();
    list.retain(|m| m.id != id);
    list.len() != before
}

pub fn find<'a>(list: &'a [Memoriter], id: &str) -> Option<&'a Memoriter> {
    list.iter().find(|m| m.id == id)
}
