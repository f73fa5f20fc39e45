use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::trigger::{Trigger, TriggerPayload};
use crate::shared::DomainError;

/// A reminder ready to be shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub title: String,
    pub content: String,
    pub payload: Option<TriggerPayload>,
}

impl NotificationMessage {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: TriggerPayload) -> Self {
        self.payload = Some(payload);
        self
    }
}

impl From<&Trigger> for NotificationMessage {
    fn from(trigger: &Trigger) -> Self {
        Self::new(trigger.title.clone(), trigger.body.clone()).with_payload(trigger.payload.clone())
    }
}

/// Delivery channel for fired reminders
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;
}
