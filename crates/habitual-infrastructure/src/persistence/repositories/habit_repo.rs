use async_trait::async_trait;
use std::sync::Arc;

use habitual_domain::habit::{Habit, HabitRepository};
use habitual_domain::storage::{KeyValueStore, HABITS_KEY};
use habitual_domain::DomainError;

use super::{decode, encode};

/// Habit collection stored as one JSON array
pub struct KvHabitRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvHabitRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HabitRepository for KvHabitRepository {
    async fn load_all(&self) -> Result<Vec<Habit>, DomainError> {
        match self.store.get(HABITS_KEY).await? {
            Some(raw) => decode(HABITS_KEY, &raw),
            None => Ok(Vec::new()),
        }
    }

    async fn save_all(&self, habits: &[Habit]) -> Result<(), DomainError> {
        let raw = encode(HABITS_KEY, habits)?;
        self.store.set(HABITS_KEY, &raw).await
    }
}
