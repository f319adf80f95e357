//! Application state.

use crate::commands::CommandError;
use crate::db::SqliteRepository;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<Mutex<SqliteRepository>>,
}

impl AppState {
    pub fn new(repository: SqliteRepository) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
        }
    }

    /// Lock the repository for the duration of one command.
    pub fn repository(&self) -> Result<MutexGuard<'_, SqliteRepository>, CommandError> {
        self.repository.lock().map_err(|_| CommandError {
            message: "repository lock poisoned".to_string(),
        })
    }
}
