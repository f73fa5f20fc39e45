use async_trait::async_trait;

use super::aggregate::Habit;
use crate::shared::DomainError;

/// Whole-collection habit repository
///
/// There is no partial update: callers read the full collection, transform it and
/// write it back in one piece.
#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Load every habit; an empty store yields an empty collection
    async fn load_all(&self) -> Result<Vec<Habit>, DomainError>;

    /// Replace the stored collection
    async fn save_all(&self, habits: &[Habit]) -> Result<(), DomainError>;
}
