use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use habitual_domain::reminder::{NotificationScheduler, Trigger, TriggerKind};
use habitual_domain::DomainError;
use habitual_infrastructure::persistence::InMemoryStore;
use habitual_lib::application::dtos::AddHabitInput;
use habitual_lib::application::services::ConfigService;
use habitual_lib::presentation::bootstrap::assemble_app_state;
use habitual_lib::presentation::commands;
use habitual_lib::AppState;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

/// Yields inside every call so overlapping passes would interleave
#[derive(Default)]
struct YieldingNotifier {
    installed: Mutex<Vec<Trigger>>,
}

#[async_trait]
impl NotificationScheduler for YieldingNotifier {
    async fn request_permission(&self) -> Result<bool, DomainError> {
        Ok(true)
    }

    async fn cancel_all(&self) -> Result<(), DomainError> {
        tokio::task::yield_now().await;
        self.installed.lock().await.clear();
        tokio::task::yield_now().await;
        Ok(())
    }

    async fn schedule(&self, trigger: &Trigger) -> Result<(), DomainError> {
        tokio::task::yield_now().await;
        self.installed.lock().await.push(trigger.clone());
        Ok(())
    }
}

async fn shared_state(
    notifier: Arc<YieldingNotifier>,
) -> (Arc<AppState>, tempfile::TempDir) {
    let config_dir = tempfile::tempdir().unwrap();
    let config = Arc::new(ConfigService::new(config_dir.path()).unwrap());
    let state = assemble_app_state(
        Arc::new(InMemoryStore::new()),
        notifier,
        config,
        fixed_today,
    )
    .await;
    (Arc::new(state), config_dir)
}

fn input(name: &str) -> AddHabitInput {
    AddHabitInput {
        name: name.to_string(),
        ..AddHabitInput::default()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_toggles_leave_exactly_the_current_reminders() {
    let notifier = Arc::new(YieldingNotifier::default());
    let (state, _config_dir) = shared_state(notifier.clone()).await;

    for name in ["Read", "Run", "Swim", "Walk"] {
        assert!(commands::add_habit(input(name), &state).await);
    }
    let ids: Vec<String> = commands::get_habits(&state)
        .await
        .iter()
        .map(|h| h.id().to_string())
        .collect();

    for round in 0..50 {
        let tasks: Vec<_> = ids
            .iter()
            .cloned()
            .map(|id| {
                let state = state.clone();
                tokio::spawn(async move {
                    commands::toggle_habit_completion(id, None, &state).await
                })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().is_some());
        }

        let pending = commands::get_habits(&state)
            .await
            .iter()
            .filter(|h| !h.is_completed())
            .count();
        let installed = notifier.installed.lock().await.clone();
        let unique: HashSet<&Trigger> = installed.iter().collect();

        assert_eq!(installed.len(), pending, "round {round}");
        assert_eq!(unique.len(), installed.len(), "round {round}");
        assert!(installed.iter().all(|t| t.kind() == TriggerKind::Good));
    }

    let report = commands::reschedule_reminders(&state).await.unwrap();
    assert_eq!(report.scheduled, notifier.installed.lock().await.len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_adds_keep_every_habit() {
    let notifier = Arc::new(YieldingNotifier::default());
    let (state, _config_dir) = shared_state(notifier.clone()).await;

    let tasks: Vec<_> = (0..20)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                commands::add_habit(input(&format!("Habit {i}")), &state).await
            })
        })
        .collect();
    for task in tasks {
        assert!(task.await.unwrap());
    }

    let habits = commands::get_habits(&state).await;
    let ids: HashSet<String> = habits.iter().map(|h| h.id().to_string()).collect();
    let names: HashSet<&str> = habits.iter().map(|h| h.name()).collect();

    assert_eq!(habits.len(), 20);
    assert_eq!(ids.len(), 20);
    assert_eq!(names.len(), 20);
    assert_eq!(notifier.installed.lock().await.len(), 20);
}
