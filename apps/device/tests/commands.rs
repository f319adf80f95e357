mod common;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use wordhoard_core::{CheckOutcome, Gender, Language, QuizDirection, Word, WordEdit};
use wordhoard_device::commands::activity::MAX_HISTORY_DAYS;
use wordhoard_device::commands::{self, CommandError, WordCounts};
use wordhoard_device::db::{ActivityRepository, WordRepository, DAILY_ACTIVITY_KEY, WORDS_KEY};
use wordhoard_device::AppState;

#[test]
fn three_added_words_make_today_active() {
    let state = common::state();

    commands::add_word(&state, common::new_word("cat", "macska", Language::En)).unwrap();
    commands::add_word(&state, common::new_word("dog", "kutya", Language::En)).unwrap();
    assert!(!commands::activity_summary(&state).unwrap().today_active);

    commands::add_word(&state, common::new_word("bird", "madár", Language::En)).unwrap();
    let summary = commands::activity_summary(&state).unwrap();
    assert!(summary.today_active);
    assert_eq!(summary.streak_days, 1);
    assert!(summary.last_7_days[6]);
}

#[test]
fn quiz_answers_count_once_per_day() {
    let state = common::state();
    commands::add_word(&state, common::new_word("cat", "macska", Language::En)).unwrap();
    commands::add_word(&state, common::new_word("dog", "kutya", Language::En)).unwrap();

    let mut quiz = commands::start_quiz(&state, Language::En, QuizDirection::Foreign).unwrap();
    assert!(commands::answer_quiz(&state, &mut quiz, "wrong", None)
        .unwrap()
        .is_some());
    assert!(commands::answer_quiz(&state, &mut quiz, "wrong", None)
        .unwrap()
        .is_some());
    assert!(!commands::mark_quiz_answered(&state).unwrap());

    let history = commands::activity_history(&state, 1).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].activity.quiz_answers, 1);
    assert!(history[0].active);
}

#[test]
fn history_window_is_capped() {
    let state = common::state();
    commands::add_active_time(&state, 1_000).unwrap();

    let history = commands::activity_history(&state, usize::MAX).unwrap();
    assert_eq!(history.len(), MAX_HISTORY_DAYS);
    assert_eq!(history.last().unwrap().activity.active_ms, 1_000);
}

#[test]
fn partial_day_records_keep_history() {
    let state = common::state();
    state
        .repository()
        .unwrap()
        .put_value(DAILY_ACTIVITY_KEY, r#"{"2020-01-01":{"addedWords":3}}"#)
        .unwrap();

    commands::mark_quiz_answered(&state).unwrap();
    let log = state.repository().unwrap().load_daily_activity();
    assert_eq!(log.len(), 2);
    assert!(log.is_active_on(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));
}

#[test]
fn command_errors_propagate_with_question_mark() {
    fn add_blank(state: &AppState) -> anyhow::Result<Word> {
        Ok(commands::add_word(state, common::new_word(" ", "", Language::En))?)
    }

    let err = add_blank(&common::state()).unwrap_err();
    assert!(err.downcast_ref::<CommandError>().is_some());
}

#[test]
fn active_time_accumulates() {
    let state = common::state();
    commands::add_active_time(&state, 120_000).unwrap();
    let day = commands::add_active_time(&state, 180_000).unwrap();
    assert_eq!(day.active_ms, 300_000);
    assert!(commands::activity_summary(&state).unwrap().today_active);

    let unchanged = commands::add_active_time(&state, 0).unwrap();
    assert_eq!(unchanged.active_ms, 300_000);
}

#[test]
fn word_changes_are_saved_immediately() {
    let state = common::state();
    let word = commands::add_word(&state, common::german_noun("Hund", "kutya", Gender::Masculine)).unwrap();
    commands::add_word(&state, common::german_noun("Katze", "macska", Gender::Feminine)).unwrap();

    assert_eq!(commands::toggle_suspended(&state, &word.id).unwrap(), Some(true));
    assert_eq!(commands::cycle_gender(&state, &word.id).unwrap(), Some(Some(Gender::Feminine)));
    assert_eq!(
        commands::word_counts(&state, Language::De).unwrap(),
        WordCounts { active: 1, suspended: 1 }
    );

    let stored = state.repository().unwrap().load_words();
    let hund = stored.iter().find(|w| w.id == word.id).unwrap();
    assert_eq!(hund.suspended, Some(true));
    assert_eq!(hund.gender, Some(Gender::Feminine));
    assert_eq!(stored[0].text, "Katze");

    assert!(commands::delete_word(&state, &word.id).unwrap());
    assert_eq!(commands::list_words(&state, Language::De).unwrap().len(), 1);
}

#[test]
fn invalid_input_is_rejected() {
    let state = common::state();
    let err = commands::add_word(&state, common::new_word("  ", "", Language::En)).unwrap_err();
    assert!(!err.message.is_empty());
    assert!(state.repository().unwrap().load_words().is_empty());
    assert!(state.repository().unwrap().load_daily_activity().is_empty());

    let word = commands::add_word(&state, common::new_word("cat", "macska", Language::En)).unwrap();
    assert!(commands::edit_word(&state, &word.id, WordEdit::default()).is_err());
    let edited = commands::edit_word(
        &state,
        &word.id,
        WordEdit {
            text: "kitten".to_string(),
            translation: Some("cica".to_string()),
            ..WordEdit::default()
        },
    )
    .unwrap();
    assert!(edited);

    let found = commands::search_words(&state, Language::En, "CICA").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].text, "kitten");
}

#[test]
fn corrupt_word_list_reads_as_empty() {
    let state = common::state();
    state.repository().unwrap().put_value(WORDS_KEY, "not json").unwrap();
    assert!(commands::list_words(&state, Language::En).unwrap().is_empty());

    commands::add_word(&state, common::new_word("cat", "macska", Language::En)).unwrap();
    assert_eq!(commands::list_words(&state, Language::En).unwrap().len(), 1);
}

#[test]
fn memoriter_lifecycle() {
    let state = common::state();
    assert!(commands::add_memoriter(&state, " ", "text", Language::De).is_err());

    let item = commands::add_memoriter(
        &state,
        "Erlkönig",
        "Wer reitet so spät durch Nacht und Wind?",
        Language::De,
    )
    .unwrap();
    assert_eq!(commands::list_memoriters(&state, Language::De).unwrap(), vec![item.clone()]);
    assert!(commands::list_memoriters(&state, Language::En).unwrap().is_empty());

    let mut play = commands::open_memoriter(&state, &item.id).unwrap().unwrap();
    assert_eq!(play.max_score(), 8);
    for blank in play.blanks().to_vec() {
        play.set_answer(&blank, blank.to_lowercase());
    }
    assert_eq!(play.check(), 8);

    assert!(commands::open_memoriter(&state, "missing").unwrap().is_none());
    assert!(commands::delete_memoriter(&state, &item.id).unwrap());
    assert!(!commands::delete_memoriter(&state, &item.id).unwrap());
}

#[test]
fn word_search_from_word_list() {
    let state = common::state();
    for (text, translation) in [("Hund", "kutya"), ("Katze", "macska"), ("Maus", "egér")] {
        commands::add_word(&state, common::new_word(text, translation, Language::De)).unwrap();
    }

    let mut game = commands::start_word_search(&state, Language::De).unwrap();
    assert_eq!(game.targets().len(), 3);
    assert!(!game.is_placeholder());

    let placement = game.placements()[0].clone();
    for (x, y) in placement.cells() {
        assert!(game.select_cell(x, y));
    }
    assert_eq!(
        commands::submit_word_search(&state, &mut game).unwrap(),
        CheckOutcome::Found(placement.word.clone())
    );
    assert_eq!(game.progress(), (1, 3));

    let history = commands::activity_history(&state, 1).unwrap();
    assert_eq!(history[0].activity.quiz_answers, 1);
    assert_eq!(history[0].activity.added_words, 3);
}

#[test]
fn empty_word_list_gives_placeholder_games() {
    let state = common::state();
    let game = commands::start_word_search(&state, Language::Ru).unwrap();
    assert!(game.is_placeholder());

    let hangman = commands::start_hangman(&state, Language::Ru, None).unwrap();
    assert_eq!(hangman.word(), "EXAMPLE");

    let mut deck = commands::start_practice(&state, Language::Ru).unwrap();
    assert!(deck.is_empty());
    assert!(!commands::next_practice_card(&state, &mut deck).unwrap());
}

#[test]
fn hangman_avoids_previous_word() {
    let state = common::state();
    commands::add_word(&state, common::new_word("cat", "macska", Language::En)).unwrap();
    commands::add_word(&state, common::new_word("dog", "kutya", Language::En)).unwrap();

    for _ in 0..10 {
        let game = commands::start_hangman(&state, Language::En, Some("CAT")).unwrap();
        assert_eq!(game.word(), "DOG");
    }
}

#[test]
fn settings_round_trip() {
    let state = common::state();
    let mut settings = commands::get_settings(&state).unwrap();
    settings.word_search.grid_size = 12;
    settings.memoriter_max_blanks = 3;
    commands::save_settings(&state, &settings).unwrap();
    assert_eq!(commands::get_settings(&state).unwrap(), settings);
}
