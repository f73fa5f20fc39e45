use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use habitual_domain::reminder::{NotificationScheduler, Trigger};
use habitual_domain::DomainError;

/// Records installed triggers without firing them
pub struct InMemoryNotificationScheduler {
    installed: RwLock<Vec<Trigger>>,
    permission_granted: AtomicBool,
    cancel_calls: AtomicUsize,
}

impl InMemoryNotificationScheduler {
    pub fn new() -> Self {
        Self {
            installed: RwLock::new(Vec::new()),
            permission_granted: AtomicBool::new(true),
            cancel_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_permission(&self, granted: bool) {
        self.permission_granted.store(granted, Ordering::SeqCst);
    }

    pub async fn installed(&self) -> Vec<Trigger> {
        self.installed.read().await.clone()
    }

    pub fn cancel_calls(&self) -> usize {
        self.cancel_calls.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryNotificationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationScheduler for InMemoryNotificationScheduler {
    async fn request_permission(&self) -> Result<bool, DomainError> {
        Ok(self.permission_granted.load(Ordering::SeqCst))
    }

    async fn cancel_all(&self) -> Result<(), DomainError> {
        self.cancel_calls.fetch_add(1, Ordering::SeqCst);
        self.installed.write().await.clear();
        Ok(())
    }

    async fn schedule(&self, trigger: &Trigger) -> Result<(), DomainError> {
        self.installed.write().await.push(trigger.clone());
        Ok(())
    }
}
