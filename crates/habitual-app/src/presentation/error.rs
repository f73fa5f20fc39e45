use habitual_domain::shared::{DomainError, ErrorCode, ErrorSeverity};
use serde::{Deserialize, Serialize};

/// Failure returned by the query, config and system commands.
///
/// Habit mutations report failure as `None` / `false` instead, so this only
/// carries what a caller needs to render an alert or decide on a retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    /// `ErrorCode` value, grouped 2xxx-6xxx
    pub code: u16,

    pub message: String,

    pub severity: ErrorSeverity,

    /// Only reminder problems are worth retrying
    pub recoverable: bool,
}

impl CommandError {
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
        }
    }

    /// Storage, config file or logger failure
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InfrastructureError, message)
    }

    /// Malformed command argument (date, log level)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ValidationError, message)
    }
}

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        Self::from_code(err.code(), err.message())
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}
