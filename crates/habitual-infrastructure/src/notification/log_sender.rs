use async_trait::async_trait;
use tracing::info;

use habitual_domain::reminder::{NotificationMessage, NotificationSender};
use habitual_domain::DomainError;

/// Writes fired reminders to the log instead of a desktop notification
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSender;

#[async_trait]
impl NotificationSender for LogNotificationSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let kind = message.payload.as_ref().map(|p| p.kind);
        info!(
            target: "habitual::reminder",
            kind = ?kind,
            "🔔 {}: {}",
            message.title,
            message.content
        );
        Ok(())
    }
}
