use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use habitual_domain::storage::KeyValueStore;
use habitual_domain::DomainError;

/// Process-local store for headless hosts and tests.
/// Reads and writes can be made to fail on demand.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw blob, bypassing failure injection
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Storage(format!("read of '{key}' failed")));
        }
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Storage(format!("write of '{key}' failed")));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_after_write() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("habits").await.unwrap(), None);

        store.set("habits", "[]").await.unwrap();
        assert_eq!(store.get("habits").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let store = InMemoryStore::new();
        store.set("habits", "[]").await.unwrap();

        store.set_fail_writes(true);
        assert!(store.set("habits", "[1]").await.is_err());
        assert_eq!(store.raw("habits").await.as_deref(), Some("[]"));

        store.set_fail_reads(true);
        assert!(store.get("habits").await.is_err());
    }
}
