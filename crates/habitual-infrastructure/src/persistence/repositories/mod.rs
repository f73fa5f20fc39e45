mod habit_repo;
mod quote_repo;
mod settings_repo;

pub use habit_repo::KvHabitRepository;
pub use quote_repo::KvQuoteRepository;
pub use settings_repo::KvSettingsRepository;

use habitual_domain::DomainError;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, DomainError> {
    serde_json::from_str(raw)
        .map_err(|e| DomainError::Deserialization(format!("blob '{key}': {e}")))
}

pub(crate) fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, DomainError> {
    serde_json::to_string(value)
        .map_err(|e| DomainError::Serialization(format!("blob '{key}': {e}")))
}
