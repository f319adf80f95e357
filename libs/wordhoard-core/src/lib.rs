//! Core vocabulary library used by the on-device application layer.
//!
//! Provides:
//! - Daily activity tracking and streaks
//! - Word-search puzzle generation and selection checking
//! - Memoriter blank picking and lenient grading
//! - Typed recall quiz, hangman and flashcard practice sessions
//! - Word list operations and shared types (Word, Memoriter, Settings, etc.)
//!
//! Everything here is pure: randomness is passed in as an `rand::Rng`.

pub mod activity;
pub mod error;
pub mod hangman;
pub mod memoriter;
pub mod practice;
pub mod quiz;
pub mod types;
pub mod wordsearch;
pub mod words;

pub use activity::{is_day_active, ActivityEvent, ActivityLog, ActivitySummary, DayEntry};
pub use error::{Error, Result};
pub use hangman::{GameStatus, GuessOutcome, Hangman};
pub use memoriter::{grade, pick_blanks, render_passage, MemoriterPlay, Phase, Segment};
pub use practice::{CardFront, PracticeDeck};
pub use quiz::{AnswerFeedback, QuizDirection, QuizSession};
pub use types::{
    DailyActivity, Gender, Language, Memoriter, Settings, UnplacedPolicy, Word,
    WordSearchSettings,
};
pub use wordsearch::{CheckOutcome, GeneratorConfig, Puzzle, Selection, WordSearch};
pub use words::{NewWord, WordEdit};
