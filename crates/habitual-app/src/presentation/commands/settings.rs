use crate::presentation::state::AppState;
use habitual_domain::settings::{Settings, SettingsPatch};

pub async fn get_settings(state: &AppState) -> Settings {
    state.services.settings.load().await
}

/// Returns the merged settings, or `None` when they could not be written
pub async fn save_settings(patch: SettingsPatch, state: &AppState) -> Option<Settings> {
    state.services.settings.save(patch).await
}
