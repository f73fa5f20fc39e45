use crate::application::services::LogLevel;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

pub fn get_log_level(state: &AppState) -> String {
    state.services.config.get_log_level().as_str().to_string()
}

/// Persist a new log level; applied on next start
pub fn set_log_level(level: String, state: &AppState) -> Result<(), CommandError> {
    let log_level = level.parse::<LogLevel>().map_err(|_| {
        CommandError::validation(
            "Invalid log level. Must be one of: error, warn, info, debug, trace",
        )
    })?;

    state
        .services
        .config
        .set_log_level(log_level)
        .map_err(|e| CommandError::infrastructure(format!("Failed to save log level: {}", e)))?;
    Ok(())
}
