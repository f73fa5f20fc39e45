// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod events;
pub mod habit;
pub mod icon;
pub mod quote;
pub mod reminder;
pub mod settings;
pub mod shared;
pub mod storage;

// Re-exports for convenience
pub use events::DomainEvent;
pub use habit::{Habit, HabitType, Priority};
pub use shared::{DomainError, HabitId};
