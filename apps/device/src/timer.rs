//! Foreground activity timer.

use crate::commands::activity::record_event;
use crate::commands::CommandError;
use crate::state::AppState;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use wordhoard_core::ActivityEvent;

/// Adds foreground time to today's activity while it is alive.
///
/// Each tick adds the time elapsed since the previous one, writing to the
/// store on the blocking pool. Dropping the timer aborts the task, so time
/// stops counting as soon as the app leaves the foreground.
pub struct ForegroundTimer {
    handle: JoinHandle<()>,
}

impl ForegroundTimer {
    /// Start ticking every `tick`. Must be called inside a tokio runtime.
    pub fn start(state: AppState, tick: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut last = Instant::now();
            let mut ticks = interval_at(last + tick, tick);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticks.tick().await;
                let now = Instant::now();
                let ms = now.duration_since(last).as_millis() as u64;
                last = now;

                let state = state.clone();
                let recorded = tokio::task::spawn_blocking(move || {
                    let repo = state.repository()?;
                    record_event(&repo, ActivityEvent::ActiveTime { ms });
                    Ok::<_, CommandError>(())
                })
                .await;

                match recorded {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        tracing::warn!(error = %e, "foreground timer stopped");
                        break;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "foreground timer tick failed");
                        break;
                    }
                }
            }
        });

        tracing::debug!(tick_secs = tick.as_secs(), "foreground timer started");
        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ForegroundTimer {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("foreground timer stopped");
    }
}
