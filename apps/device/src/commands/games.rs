//! Commands that start game sessions and report their progress.
//!
//! Sessions live in the caller. These commands only read the word list
//! and count answers towards today's activity.

use crate::db::{SettingsRepository, WordRepository};
use crate::state::AppState;
use wordhoard_core::hangman::pick_word;
use wordhoard_core::wordsearch::{generate, pick_candidates};
use wordhoard_core::{
    ActivityEvent, AnswerFeedback, CheckOutcome, Gender, GeneratorConfig, Hangman, Language,
    PracticeDeck, QuizDirection, QuizSession, WordSearch,
};

use super::activity::record_event;
use super::CommandError;

/// Build a word-search puzzle from the active words of `language`.
pub fn start_word_search(state: &AppState, language: Language) -> Result<WordSearch, CommandError> {
    let repo = state.repository()?;
    let config = GeneratorConfig::from(repo.load_settings().word_search);
    let words = repo.load_words();

    let mut rng = rand::thread_rng();
    let candidates = pick_candidates(&words, language, config.size, &mut rng);
    let puzzle = generate(&candidates, language, &config, &mut rng);
    tracing::debug!(
        candidates = candidates.len(),
        placed = puzzle.targets.len(),
        "word search generated"
    );

    Ok(WordSearch::new(puzzle))
}

/// Check the current selection. A found word counts as a quiz answer.
pub fn submit_word_search(
    state: &AppState,
    game: &mut WordSearch,
) -> Result<CheckOutcome, CommandError> {
    let outcome = game.check_selection();
    if let CheckOutcome::Found(_) = outcome {
        let repo = state.repository()?;
        record_event(&repo, ActivityEvent::QuizAnswered);
    }
    Ok(outcome)
}

pub fn start_quiz(
    state: &AppState,
    language: Language,
    direction: QuizDirection,
) -> Result<QuizSession, CommandError> {
    let repo = state.repository()?;
    let words = repo.load_words();
    Ok(QuizSession::start(&words, language, direction, &mut rand::thread_rng()))
}

/// Grade an answer. Every graded answer counts as a quiz answer.
pub fn answer_quiz(
    state: &AppState,
    session: &mut QuizSession,
    answer: &str,
    gender: Option<Gender>,
) -> Result<Option<AnswerFeedback>, CommandError> {
    let feedback = session.answer(answer, gender);
    if feedback.is_some() {
        let repo = state.repository()?;
        record_event(&repo, ActivityEvent::QuizAnswered);
    }
    Ok(feedback)
}

/// New hangman game, avoiding `previous` when the list allows it.
pub fn start_hangman(
    state: &AppState,
    language: Language,
    previous: Option<&str>,
) -> Result<Hangman, CommandError> {
    let repo = state.repository()?;
    let words = repo.load_words();
    let word = pick_word(&words, language, previous, &mut rand::thread_rng());
    Ok(Hangman::new(&word))
}

pub fn start_practice(state: &AppState, language: Language) -> Result<PracticeDeck, CommandError> {
    let repo = state.repository()?;
    let words = repo.load_words();
    Ok(PracticeDeck::new(&words, language, &mut rand::thread_rng()))
}

/// Advance to the next card. Moving on from a card counts as a quiz answer.
pub fn next_practice_card(state: &AppState, deck: &mut PracticeDeck) -> Result<bool, CommandError> {
    let moved = deck.next_card();
    if moved {
        let repo = state.repository()?;
        record_event(&repo, ActivityEvent::QuizAnswered);
    }
    Ok(moved)
}
