mod derivation;
mod scheduler;
mod sender;
mod trigger;

pub use derivation::{
    derive_triggers, BAD_HABIT_REMINDER_TIMES, GOOD_HABIT_REMINDER_TIME,
};
pub use scheduler::NotificationScheduler;
pub use sender::{NotificationMessage, NotificationSender};
pub use trigger::{Trigger, TriggerKind, TriggerPayload, TriggerSchedule};
