//! Daily activity tracking and streaks.
//!
//! A day is *active* when any one of three thresholds is met: enough words
//! added, at least one quiz answer, or enough foreground time. Streaks count
//! consecutive active days ending at a reference date.

use crate::types::DailyActivity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Words added in a day that make it active on their own.
pub const ACTIVE_WORDS_THRESHOLD: u32 = 3;
/// Quiz answers in a day that make it active on their own.
pub const ACTIVE_QUIZ_THRESHOLD: u32 = 1;
/// Foreground milliseconds in a day that make it active on their own (5 minutes).
pub const ACTIVE_MS_THRESHOLD: u64 = 5 * 60 * 1000;

/// Whether a day's counters meet any activity threshold.
pub fn is_day_active(record: &DailyActivity) -> bool {
    record.added_words >= ACTIVE_WORDS_THRESHOLD
        || record.quiz_answers >= ACTIVE_QUIZ_THRESHOLD
        || record.active_ms >= ACTIVE_MS_THRESHOLD
}

impl DailyActivity {
    pub fn is_active(&self) -> bool {
        is_day_active(self)
    }
}

/// Something the user did that counts towards the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEvent {
    WordAdded { count: u32 },
    QuizAnswered,
    ActiveTime { ms: u64 },
}

/// One entry of an activity history window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub activity: DailyActivity,
    pub active: bool,
}

/// Motivation summary shown next to the word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub today_active: bool,
    pub streak_days: u32,
    /// Oldest first, today last.
    pub last_7_days: [bool; 7],
}

/// Activity records keyed by calendar date.
///
/// Serialized as a JSON object keyed by `YYYY-MM-DD`. A missing date is
/// equivalent to an all-zero record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityLog {
    days: BTreeMap<NaiveDate, DailyActivity>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for `date`, or the zero record.
    pub fn day(&self, date: NaiveDate) -> DailyActivity {
        self.days.get(&date).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Apply an event to the record for `date`. Returns whether anything changed.
    ///
    /// Quiz answers count once per day: once a day holds a quiz answer,
    /// further `QuizAnswered` events are ignored.
    pub fn record(&mut self, date: NaiveDate, event: ActivityEvent) -> bool {
        if let ActivityEvent::QuizAnswered = event {
            if self.day(date).quiz_answers > 0 {
                return false;
            }
        }

        let day = self.days.entry(date).or_default();
        match event {
            ActivityEvent::WordAdded { count } => {
                day.added_words = day.added_words.saturating_add(count);
            }
            ActivityEvent::QuizAnswered => {
                day.quiz_answers += 1;
            }
            ActivityEvent::ActiveTime { ms } => {
                day.active_ms = day.active_ms.saturating_add(ms);
            }
        }
        true
    }

    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.days.get(&date).map_or(false, is_day_active)
    }

    /// Consecutive active days ending at `today`.
    ///
    /// Today only counts once it is already active; an inactive today
    /// yields 0 even if yesterday was active.
    pub fn streak(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut date = today;

        while self.is_active_on(date) {
            streak += 1;
            match date.pred_opt() {
                Some(prev) => date = prev,
                None => break,
            }
        }

        streak
    }

    /// The `days` dates ending at `today`, oldest first.
    ///
    /// The window stops early at the first representable date.
    pub fn history(&self, today: NaiveDate, days: usize) -> Vec<DayEntry> {
        let mut entries: Vec<DayEntry> = std::iter::successors(Some(today), |d| d.pred_opt())
            .take(days)
            .map(|date| {
                let activity = self.day(date);
                DayEntry {
                    date,
                    activity,
                    active: is_day_active(&activity),
                }
            })
            .collect();
        entries.reverse();
        entries
    }

    /// Active flags of the week ending at `today`, oldest first.
    pub fn last_7_days(&self, today: NaiveDate) -> [bool; 7] {
        let mut week = [false; 7];
        for (slot, entry) in week.iter_mut().zip(self.history(today, 7)) {
            *slot = entry.active;
        }
        week
    }

    pub fn summary(&self, today: NaiveDate) -> ActivitySummary {
        ActivitySummary {
            today_active: self.is_active_on(today),
            streak_days: self.streak(today),
            last_7_days: self.last_7_days(today),
        }
    }
}

impl FromIterator<(NaiveDate, DailyActivity)> for ActivityLog {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DailyActivity)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(added_words: u32, quiz_answers: u32, active_ms: u64) -> DailyActivity {
        DailyActivity {
            added_words,
            quiz_answers,
            active_ms,
        }
    }

    fn active_day() -> DailyActivity {
        record(0, 1, 0)
    }

    #[test]
    fn thresholds() {
        assert!(is_day_active(&record(3, 0, 0)));
        assert!(!is_day_active(&record(2, 0, 0)));
        assert!(is_day_active(&record(0, 1, 0)));
        assert!(is_day_active(&record(0, 0, 300_000)));
        assert!(!is_day_active(&record(0, 0, 299_999)));
        assert!(!is_day_active(&DailyActivity::default()));
    }

    #[test]
    fn activity_is_monotonic() {
        for words in 0..5 {
            for quiz in 0..3 {
                for ms in [0, 299_999, 300_000, 600_000] {
                    let base = record(words, quiz, ms);
                    if !base.is_active() {
                        continue;
                    }
                    assert!(record(words + 1, quiz, ms).is_active());
                    assert!(record(words, quiz + 1, ms).is_active());
                    assert!(record(words, quiz, ms + 1).is_active());
                }
            }
        }
    }

    #[test]
    fn quiz_answer_counts_once_per_day() {
        let mut log = ActivityLog::new();
        let today = date("2026-03-10");

        assert!(log.record(today, ActivityEvent::QuizAnswered));
        assert!(!log.record(today, ActivityEvent::QuizAnswered));
        assert_eq!(log.day(today).quiz_answers, 1);

        // A new day starts uncapped again.
        assert!(log.record(date("2026-03-11"), ActivityEvent::QuizAnswered));
    }

    #[test]
    fn words_and_time_accumulate() {
        let mut log = ActivityLog::new();
        let today = date("2026-03-10");

        for _ in 0..4 {
            log.record(today, ActivityEvent::WordAdded { count: 1 });
        }
        log.record(today, ActivityEvent::ActiveTime { ms: 10_000 });
        log.record(today, ActivityEvent::ActiveTime { ms: 12_500 });

        assert_eq!(log.day(today), record(4, 0, 22_500));
    }

    #[test]
    fn three_words_make_today_active() {
        let mut log = ActivityLog::new();
        let today = date("2026-03-10");

        log.record(today, ActivityEvent::WordAdded { count: 1 });
        log.record(today, ActivityEvent::WordAdded { count: 1 });
        assert!(!log.is_active_on(today));

        log.record(today, ActivityEvent::WordAdded { count: 1 });
        assert!(log.is_active_on(today));
        assert_eq!(log.day(today).quiz_answers, 0);
    }

    #[test]
    fn empty_log_has_no_streak() {
        assert_eq!(ActivityLog::new().streak(date("2026-03-10")), 0);
    }

    #[test]
    fn streak_stops_at_first_inactive_day() {
        let today = date("2026-03-10");
        let mut log: ActivityLog = (0..5)
            .map(|i| (today - Duration::days(i), active_day()))
            .collect();
        // Day six is present but inactive, day seven active again.
        log.record(today - Duration::days(5), ActivityEvent::WordAdded { count: 2 });
        log.record(today - Duration::days(6), ActivityEvent::QuizAnswered);

        assert_eq!(log.streak(today), 5);
    }

    #[test]
    fn inactive_today_breaks_streak() {
        let today = date("2026-03-10");
        let log: ActivityLog = (1..4)
            .map(|i| (today - Duration::days(i), active_day()))
            .collect();

        assert_eq!(log.streak(today), 0);
        assert_eq!(log.streak(today - Duration::days(1)), 3);
    }

    #[test]
    fn streak_crosses_month_boundary() {
        let log: ActivityLog = ["2026-02-27", "2026-02-28", "2026-03-01"]
            .iter()
            .map(|d| (date(d), active_day()))
            .collect();

        assert_eq!(log.streak(date("2026-03-01")), 3);
    }

    #[test]
    fn last_seven_days_oldest_first() {
        let today = date("2026-03-10");
        let log: ActivityLog = [
            (today, active_day()),
            (today - Duration::days(6), active_day()),
            (today - Duration::days(3), record(1, 0, 0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            log.last_7_days(today),
            [true, false, false, false, false, false, true]
        );
    }

    #[test]
    fn history_window() {
        let today = date("2026-03-10");
        let mut log = ActivityLog::new();
        log.record(today, ActivityEvent::ActiveTime { ms: 1_000 });

        let history = log.history(today, 3);
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].date, date("2026-03-08"));
        assert_eq!(history[2].activity.active_ms, 1_000);
        assert!(!history[2].active);
    }

    #[test]
    fn history_stops_at_earliest_date() {
        let log = ActivityLog::new();
        let today = NaiveDate::MIN.succ_opt().unwrap().succ_opt().unwrap();

        let history = log.history(today, 10);
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].date, NaiveDate::MIN);
        assert_eq!(history[2].date, today);
    }

    #[test]
    fn summary_combines_views() {
        let today = date("2026-03-10");
        let log: ActivityLog = [(today, active_day()), (today - Duration::days(1), active_day())]
            .into_iter()
            .collect();

        let summary = log.summary(today);
        assert!(summary.today_active);
        assert_eq!(summary.streak_days, 2);
        assert_eq!(&summary.last_7_days[5..], &[true, true]);
    }

    #[test]
    fn serializes_with_date_keys() {
        let mut log = ActivityLog::new();
        log.record(date("2026-03-10"), ActivityEvent::WordAdded { count: 1 });

        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(
            json,
            r#"{"2026-03-10":{"addedWords":1,"quizAnswers":0,"activeMs":0}}"#
        );
        let back: ActivityLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
