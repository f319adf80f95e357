//! Settings commands.

use crate::db::SettingsRepository;
use crate::state::AppState;
use wordhoard_core::Settings;

use super::CommandError;

pub fn get_settings(state: &AppState) -> Result<Settings, CommandError> {
    let repo = state.repository()?;
    Ok(repo.load_settings())
}

/// Unlike list saves, a settings save reports its failure.
pub fn save_settings(state: &AppState, settings: &Settings) -> Result<(), CommandError> {
    let repo = state.repository()?;
    repo.save_settings(settings).map_err(Into::into)
}
