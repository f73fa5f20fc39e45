mod config_service;
mod habit_store;
mod quote_service;
mod reminder_scheduler;
mod settings_service;

pub use config_service::{ConfigService, LogLevel};
pub use habit_store::HabitStore;
pub use quote_service::QuoteService;
pub use reminder_scheduler::{ReminderScheduler, RescheduleReport};
pub use settings_service::SettingsService;
