mod in_memory_scheduler;
mod log_sender;
mod timer_scheduler;

pub use in_memory_scheduler::InMemoryNotificationScheduler;
pub use log_sender::LogNotificationSender;
pub use timer_scheduler::{next_daily_occurrence, TokioNotificationScheduler};
