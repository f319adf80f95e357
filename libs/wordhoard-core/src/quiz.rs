//! Typed recall quiz over the active words of a language.

use crate::types::{Gender, Language, Word};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Which side of the word the player types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizDirection {
    /// Shown the translation, type the foreign form (and gender).
    Foreign,
    /// Shown the foreign form, type the translation.
    Native,
}

impl Default for QuizDirection {
    fn default() -> Self {
        Self::Foreign
    }
}

impl QuizDirection {
    /// The answer expected for `word` in this direction.
    pub fn expected<'a>(&self, word: &'a Word) -> &'a str {
        match self {
            Self::Foreign => &word.text,
            Self::Native => word.translation.as_deref().unwrap_or(""),
        }
    }

    /// The prompt shown for `word` in this direction.
    pub fn prompt<'a>(&self, word: &'a Word) -> &'a str {
        match self {
            Self::Foreign => word.translation.as_deref().unwrap_or(&word.text),
            Self::Native => &word.text,
        }
    }
}

/// Feedback for one answered word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub text_correct: bool,
    pub gender_correct: bool,
    pub expected: String,
    pub expected_gender: Option<Gender>,
}

/// Check a typed answer against `word`.
///
/// Text is compared ignoring case and surrounding whitespace. When typing
/// the foreign form of a gendered word the gender must match too.
pub fn check_answer(
    word: &Word,
    direction: QuizDirection,
    answer: &str,
    gender: Option<Gender>,
) -> AnswerFeedback {
    let expected = direction.expected(word);
    let text_correct = expected.to_lowercase() == answer.trim().to_lowercase();
    let gender_correct = match (direction, word.gender) {
        (QuizDirection::Native, _) | (_, None) => true,
        (QuizDirection::Foreign, Some(g)) => gender == Some(g),
    };

    AnswerFeedback {
        correct: text_correct && gender_correct,
        text_correct,
        gender_correct,
        expected: expected.to_string(),
        expected_gender: word.gender,
    }
}

/// A quiz run: every active word asked once, in random order.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSession {
    direction: QuizDirection,
    current: Option<Word>,
    queue: VecDeque<Word>,
    total: usize,
    answered: usize,
    correct: usize,
    wrong: usize,
}

impl QuizSession {
    pub fn start<R: Rng + ?Sized>(
        words: &[Word],
        language: Language,
        direction: QuizDirection,
        rng: &mut R,
    ) -> Self {
        let mut pool: Vec<Word> = words
            .iter()
            .filter(|w| w.is_active_in(language))
            .cloned()
            .collect();
        pool.shuffle(rng);

        let total = pool.len();
        let mut queue: VecDeque<Word> = pool.into();
        let current = queue.pop_front();

        Self {
            direction,
            current,
            queue,
            total,
            answered: 0,
            correct: 0,
            wrong: 0,
        }
    }

    pub fn direction(&self) -> QuizDirection {
        self.direction
    }

    /// Word being asked, `None` once the queue is exhausted.
    pub fn current(&self) -> Option<&Word> {
        self.current.as_ref()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.current.as_ref().map(|w| self.direction.prompt(w))
    }

    /// Answer the current word and move on to the next one.
    ///
    /// Returns `None` when there is nothing left to answer.
    pub fn answer(&mut self, answer: &str, gender: Option<Gender>) -> Option<AnswerFeedback> {
        let word = self.current.take()?;
        let feedback = check_answer(&word, self.direction, answer, gender);

        self.answered += 1;
        if feedback.correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
        self.current = self.queue.pop_front();

        Some(feedback)
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn wrong(&self) -> usize {
        self.wrong
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of the run answered, between 0 and 1.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.answered as f64 / self.total as f64).min(1.0)
    }
}
