use habitual_infrastructure::logging;

use crate::presentation::error::CommandError;

/// Application version information
pub fn get_app_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let profile = if cfg!(debug_assertions) {
        "Debug"
    } else {
        "Release"
    };
    format!("{} ({})", version, profile)
}

/// Directory the log files are written to
pub fn get_log_dir() -> Result<String, CommandError> {
    logging::get_log_dir()
        .map(|dir| dir.display().to_string())
        .ok_or_else(|| CommandError::infrastructure("Logger not initialized"))
}
