use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod date;
pub use date::{today, DATE_FORMAT};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(HabitId);

impl HabitId {
    /// Id stamped from the creation instant (epoch milliseconds)
    pub fn from_creation_time(created_at: DateTime<Utc>) -> Self {
        Self(created_at.timestamp_millis().to_string())
    }

    /// The id one millisecond later, used to resolve collisions at creation.
    /// Non-numeric ids get a numeric suffix instead.
    pub fn successor(&self) -> Self {
        match self.0.parse::<i64>() {
            Ok(millis) => Self(millis.saturating_add(1).to_string()),
            Err(_) => Self(format!("{}-1", self.0)),
        }
    }
}

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Not Found (2xxx)
    HabitNotFound = 2001,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    StorageError = 4002,
    SerializationError = 4004,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
    NotificationError = 5002,
    PermissionDenied = 5003,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::HabitNotFound | ErrorCode::ValidationError | ErrorCode::InvalidInput => {
                ErrorSeverity::Info
            }

            ErrorCode::NotificationError | ErrorCode::PermissionDenied => ErrorSeverity::Warning,

            ErrorCode::RepositoryError
            | ErrorCode::StorageError
            | ErrorCode::SerializationError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,
        }
    }

    /// Reminder failures never block habit tracking
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::NotificationError | ErrorCode::PermissionDenied
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::HabitNotFound(_) => ErrorCode::HabitNotFound,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Storage(_) => ErrorCode::StorageError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Notification(_) => ErrorCode::NotificationError,
            DomainError::PermissionDenied(_) => ErrorCode::PermissionDenied,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::Deserialization(_) => ErrorCode::SerializationError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::HabitNotFound(msg)
            | DomainError::Repository(msg)
            | DomainError::Storage(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Notification(msg)
            | DomainError::PermissionDenied(msg)
            | DomainError::Validation(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Serialization(msg)
            | DomainError::Deserialization(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
