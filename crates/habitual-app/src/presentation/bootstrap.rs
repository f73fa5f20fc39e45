use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::application::event_handlers::SchedulerReloadEventHandler;
use crate::application::queries::{HabitQueries, ProgressQueries};
use crate::application::services::{
    ConfigService, HabitStore, QuoteService, ReminderScheduler, SettingsService,
};
use crate::presentation::state::{AppState, Queries, Repositories, Runtime, Services};
use habitual_domain::events::{
    DailyCompletionsReset, EventBus, HabitCreated, HabitDeleted, HabitToggled, HabitUpdated,
    SettingsUpdated, TypedEventHandlerWrapper,
};
use habitual_domain::habit::HabitRepository;
use habitual_domain::reminder::NotificationScheduler;
use habitual_domain::shared;
use habitual_domain::storage::KeyValueStore;
use habitual_infrastructure::events::InMemoryEventBus;
use habitual_infrastructure::icons::BuiltinIconRegistry;
use habitual_infrastructure::logging;
use habitual_infrastructure::notification::{LogNotificationSender, TokioNotificationScheduler};
use habitual_infrastructure::persistence::repositories::{
    KvHabitRepository, KvQuoteRepository, KvSettingsRepository,
};
use habitual_infrastructure::persistence::JsonFileStore;

const APP_DIR_NAME: &str = "habitual";

/// `<platform data dir>/habitual`, or `./habitual` when the platform has none
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Wire the production stack rooted at `data_dir`: file logging, JSON file
/// storage and in-process timer reminders.
pub async fn build_app_state(data_dir: &Path) -> anyhow::Result<AppState> {
    let startup_started_at = Instant::now();

    std::fs::create_dir_all(data_dir)?;
    let config_service = Arc::new(ConfigService::new(data_dir)?);

    let directive = config_service.get_log_level().filter_directive();
    if let Err(e) = logging::init_logger(data_dir.join("logs"), Some(directive.as_str())) {
        warn!("⚠️  Failed to initialize logger: {}", e);
    }

    info!("📁 Data directory: {}", data_dir.display());

    info!("🗄️  Opening store...");
    let started_at = Instant::now();
    let store = Arc::new(JsonFileStore::open(data_dir.join("store")).await?);
    info!("✓ Store opened ({}ms)", started_at.elapsed().as_millis());

    let notifier = Arc::new(TokioNotificationScheduler::new(Arc::new(
        LogNotificationSender,
    )));

    let state = assemble_app_state(store, notifier, config_service, shared::today).await;

    info!(
        "🚀 App state ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );
    Ok(state)
}

/// Build services, queries and event wiring over the given collaborators
pub async fn assemble_app_state(
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn NotificationScheduler>,
    config_service: Arc<ConfigService>,
    today: fn() -> NaiveDate,
) -> AppState {
    let habit_repo = Arc::new(KvHabitRepository::new(store.clone())) as Arc<dyn HabitRepository>;
    let settings_repo = Arc::new(KvSettingsRepository::new(store.clone()));
    let quote_repo = Arc::new(KvQuoteRepository::new(store.clone()));
    let icons = Arc::new(BuiltinIconRegistry);

    info!("🔧 Initializing event bus...");
    let event_bus = Arc::new(InMemoryEventBus::new());
    let bus = event_bus.clone() as Arc<dyn EventBus>;

    let habit_store =
        Arc::new(HabitStore::new(habit_repo.clone(), bus.clone()).with_clock(today));
    let reminders = Arc::new(ReminderScheduler::new(notifier.clone()));
    let settings_service = Arc::new(SettingsService::new(settings_repo, bus));
    let quote_service = Arc::new(QuoteService::new(quote_repo).with_clock(today));

    let reload_handler = SchedulerReloadEventHandler::new(
        reminders.clone(),
        habit_repo.clone(),
        settings_service.clone(),
    );

    event_bus
        .subscribe::<HabitCreated>(Arc::new(TypedEventHandlerWrapper::<HabitCreated, _>::new(
            reload_handler.clone(),
        )))
        .await;
    event_bus
        .subscribe::<HabitToggled>(Arc::new(TypedEventHandlerWrapper::<HabitToggled, _>::new(
            reload_handler.clone(),
        )))
        .await;
    event_bus
        .subscribe::<HabitUpdated>(Arc::new(TypedEventHandlerWrapper::<HabitUpdated, _>::new(
            reload_handler.clone(),
        )))
        .await;
    event_bus
        .subscribe::<HabitDeleted>(Arc::new(TypedEventHandlerWrapper::<HabitDeleted, _>::new(
            reload_handler.clone(),
        )))
        .await;
    event_bus
        .subscribe::<DailyCompletionsReset>(Arc::new(TypedEventHandlerWrapper::<
            DailyCompletionsReset,
            _,
        >::new(reload_handler.clone())))
        .await;
    event_bus
        .subscribe::<SettingsUpdated>(Arc::new(
            TypedEventHandlerWrapper::<SettingsUpdated, _>::new(reload_handler),
        ))
        .await;

    info!("✓ Event bus initialized and handlers registered");

    let habit_queries =
        Arc::new(HabitQueries::new(habit_repo.clone(), icons.clone()).with_clock(today));
    let progress_queries = Arc::new(ProgressQueries::new(habit_repo.clone()));

    AppState {
        runtime: Runtime {
            store,
            notifier,
            event_bus,
        },
        repositories: Repositories { habit: habit_repo },
        services: Services {
            habits: habit_store,
            reminders,
            settings: settings_service,
            quotes: quote_service,
            config: config_service,
        },
        queries: Queries {
            habits: habit_queries,
            progress: progress_queries,
        },
        icons,
    }
}
