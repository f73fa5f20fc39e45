use async_trait::async_trait;

use crate::shared::DomainError;

pub const HABITS_KEY: &str = "habits";
pub const SETTINGS_KEY: &str = "appSettings";
pub const QUOTE_KEY: &str = "dailyQuote";

/// Whole-blob string storage. A completed `set` must be visible to any later `get`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
