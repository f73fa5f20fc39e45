use async_trait::async_trait;

use super::trigger::Trigger;
use crate::shared::DomainError;

/// Platform notification subsystem
#[async_trait]
pub trait NotificationScheduler: Send + Sync {
    /// Returns whether notifications may be shown
    async fn request_permission(&self) -> Result<bool, DomainError>;

    /// Remove every trigger previously installed
    async fn cancel_all(&self) -> Result<(), DomainError>;

    async fn schedule(&self, trigger: &Trigger) -> Result<(), DomainError>;
}
