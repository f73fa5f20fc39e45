use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::events::DomainEvent;
use crate::shared::HabitId;

macro_rules! impl_domain_event {
    ($type:ty) => {
        impl DomainEvent for $type {
            fn as_any(&self) -> &(dyn Any + Send + Sync) {
                self
            }

            fn event_type_name(&self) -> &'static str {
                std::any::type_name::<Self>()
            }
        }
    };
}

/// Event fired when a habit is added
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitCreated {
    pub habit_id: HabitId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitCreated);

/// Event fired when a completion entry is flipped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitToggled {
    pub habit_id: HabitId,
    pub date: NaiveDate,
    pub completed: bool,
    /// Whether `date` was today, i.e. the cached state changed
    pub affects_today: bool,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitToggled);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitUpdated {
    pub habit_id: HabitId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitUpdated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitDeleted {
    pub habit_id: HabitId,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(HabitDeleted);

/// Event fired after the daily reset pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCompletionsReset {
    pub date: NaiveDate,
    pub reset_count: usize,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(DailyCompletionsReset);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsUpdated {
    pub enable_high_priority_reminders: bool,
    pub high_priority_reminder_time: String,
    pub occurred_at: DateTime<Utc>,
}

impl_domain_event!(SettingsUpdated);
