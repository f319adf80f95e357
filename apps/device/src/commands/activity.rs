//! Daily activity commands.

use crate::db::{ActivityRepository, SqliteRepository};
use crate::state::AppState;
use wordhoard_core::{ActivityEvent, ActivitySummary, DailyActivity, DayEntry};

use super::{persist, today, CommandError};

/// Longest history window served, ten years.
pub const MAX_HISTORY_DAYS: usize = 3660;

/// Apply `event` to today's record and save it if anything changed.
pub(crate) fn record_event(repo: &SqliteRepository, event: ActivityEvent) -> bool {
    let date = today(repo);
    let mut log = repo.load_daily_activity();
    let changed = log.record(date, event);
    if changed {
        tracing::debug!(?event, %date, "activity recorded");
        persist(repo.save_daily_activity(&log), "daily activity");
    }
    changed
}

/// Today's status, the current streak and the last seven days.
pub fn activity_summary(state: &AppState) -> Result<ActivitySummary, CommandError> {
    let repo = state.repository()?;
    Ok(repo.load_daily_activity().summary(today(&repo)))
}

/// The last `days` days, oldest first, at most [`MAX_HISTORY_DAYS`].
pub fn activity_history(state: &AppState, days: usize) -> Result<Vec<DayEntry>, CommandError> {
    let repo = state.repository()?;
    let days = days.min(MAX_HISTORY_DAYS);
    Ok(repo.load_daily_activity().history(today(&repo), days))
}

/// Count a quiz answer. Only the first answer of a day is recorded.
pub fn mark_quiz_answered(state: &AppState) -> Result<bool, CommandError> {
    let repo = state.repository()?;
    Ok(record_event(&repo, ActivityEvent::QuizAnswered))
}

/// Add foreground time to today and return the updated record.
pub fn add_active_time(state: &AppState, ms: u64) -> Result<DailyActivity, CommandError> {
    let repo = state.repository()?;
    if ms > 0 {
        record_event(&repo, ActivityEvent::ActiveTime { ms });
    }
    Ok(repo.load_daily_activity().day(today(&repo)))
}
