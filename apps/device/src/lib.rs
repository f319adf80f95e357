//! On-device layer of wordhoard: local storage, commands invoked by the
//! screens, and the foreground activity timer.

pub mod commands;
pub mod config;
pub mod db;
pub mod state;
pub mod timer;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::AppConfig;
pub use state::AppState;
pub use timer::ForegroundTimer;

use crate::db::SqliteRepository;

/// Install the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Open the store named by `config`, creating its directory if needed.
pub fn open(config: &AppConfig) -> anyhow::Result<AppState> {
    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating data directory {}", parent.display()))?;
    }

    tracing::info!("Opening database at {}", config.db_path.display());
    let repository = SqliteRepository::open(&config.db_path)
        .with_context(|| format!("opening database {}", config.db_path.display()))?;

    Ok(AppState::new(repository))
}
