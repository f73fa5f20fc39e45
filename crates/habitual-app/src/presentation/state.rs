use std::sync::Arc;

use crate::application::queries::{HabitQueries, ProgressQueries};
use crate::application::services::{
    ConfigService, HabitStore, QuoteService, ReminderScheduler, SettingsService,
};
use habitual_domain::habit::HabitRepository;
use habitual_domain::icon::IconRegistry;
use habitual_domain::reminder::NotificationScheduler;
use habitual_domain::storage::KeyValueStore;
use habitual_infrastructure::events::InMemoryEventBus;

pub struct Runtime {
    pub store: Arc<dyn KeyValueStore>,
    pub notifier: Arc<dyn NotificationScheduler>,
    pub event_bus: Arc<InMemoryEventBus>,
}

pub struct Repositories {
    pub habit: Arc<dyn HabitRepository>,
}

pub struct Services {
    pub habits: Arc<HabitStore>,
    pub reminders: Arc<ReminderScheduler>,
    pub settings: Arc<SettingsService>,
    pub quotes: Arc<QuoteService>,
    pub config: Arc<ConfigService>,
}

pub struct Queries {
    pub habits: Arc<HabitQueries>,
    pub progress: Arc<ProgressQueries>,
}

pub struct AppState {
    pub runtime: Runtime,
    pub repositories: Repositories,
    pub services: Services,
    pub queries: Queries,
    pub icons: Arc<dyn IconRegistry>,
}

impl AppState {
    /// Cancel every installed reminder before the host exits
    pub async fn shutdown(&self) {
        self.services.reminders.cancel_all().await;
    }
}
