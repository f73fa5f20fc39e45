use chrono::{Duration, NaiveDate};
use std::sync::Arc;

use habitual_domain::habit::{Habit, HabitDetails, HabitType};
use habitual_domain::quote::quote_for_date;
use habitual_domain::reminder::TriggerKind;
use habitual_domain::settings::SettingsPatch;
use habitual_domain::storage::{KeyValueStore, HABITS_KEY};
use habitual_domain::HabitId;
use habitual_infrastructure::notification::InMemoryNotificationScheduler;
use habitual_infrastructure::persistence::InMemoryStore;
use habitual_lib::application::dtos::AddHabitInput;
use habitual_lib::application::services::ConfigService;
use habitual_lib::presentation::bootstrap::assemble_app_state;
use habitual_lib::presentation::commands;
use habitual_lib::{build_app_state, AppState};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

struct Harness {
    state: AppState,
    store: Arc<InMemoryStore>,
    notifier: Arc<InMemoryNotificationScheduler>,
    _config_dir: tempfile::TempDir,
}

async fn harness() -> Harness {
    let config_dir = tempfile::tempdir().unwrap();
    let store = Arc::new(InMemoryStore::new());
    let notifier = Arc::new(InMemoryNotificationScheduler::new());
    let config = Arc::new(ConfigService::new(config_dir.path()).unwrap());

    let state = assemble_app_state(store.clone(), notifier.clone(), config, fixed_today).await;
    Harness {
        state,
        store,
        notifier,
        _config_dir: config_dir,
    }
}

fn input(name: &str) -> AddHabitInput {
    AddHabitInput {
        name: name.to_string(),
        ..AddHabitInput::default()
    }
}

async fn kinds(notifier: &InMemoryNotificationScheduler) -> Vec<TriggerKind> {
    let mut kinds: Vec<TriggerKind> =
        notifier.installed().await.iter().map(|t| t.kind()).collect();
    kinds.sort();
    kinds
}

#[tokio::test]
async fn test_good_habit_toggle_cycle() {
    let h = harness().await;

    let mut water = input("Drink water");
    water.priority = "high".parse().unwrap();
    assert!(commands::add_habit(water, &h.state).await);

    let habits = commands::get_habits(&h.state).await;
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].streak(), 0);
    assert!(habits[0].icon().is_some());
    let id = habits[0].id().to_string();
    assert_eq!(
        kinds(&h.notifier).await,
        vec![
            TriggerKind::Good,
            TriggerKind::Priority,
            TriggerKind::IncompletePriority
        ]
    );

    let habits = commands::toggle_habit_completion(id.clone(), None, &h.state)
        .await
        .unwrap();
    assert_eq!(habits[0].streak(), 1);
    assert!(habits[0].is_completed());
    assert_eq!(kinds(&h.notifier).await, vec![TriggerKind::Priority]);

    let habits = commands::toggle_habit_completion(id, None, &h.state)
        .await
        .unwrap();
    assert_eq!(habits[0].streak(), 0);
    assert!(!habits[0].is_completed());
    assert_eq!(habits[0].failed_days(), 1);
    assert_eq!(kinds(&h.notifier).await.len(), 3);
}

#[tokio::test]
async fn test_bad_habit_keeps_streak_on_untoggle() {
    let h = harness().await;

    let mut smoking = input("Smoking");
    smoking.habit_type = HabitType::Bad;
    assert!(commands::add_habit(smoking, &h.state).await);
    let id = commands::get_habits(&h.state).await[0].id().to_string();
    assert_eq!(h.notifier.installed().await.len(), 10);

    let habits = commands::toggle_habit_completion(id.clone(), None, &h.state)
        .await
        .unwrap();
    assert_eq!(habits[0].streak(), 1);

    let habits = commands::toggle_habit_completion(id, None, &h.state)
        .await
        .unwrap();
    assert_eq!(habits[0].streak(), 1);
    assert!(!habits[0].is_completed());
}

#[tokio::test]
async fn test_priority_digest_names_only_pending_habits() {
    let h = harness().await;

    for name in ["Read", "Run"] {
        let mut habit = input(name);
        habit.priority = "high".parse().unwrap();
        assert!(commands::add_habit(habit, &h.state).await);
    }
    let read_id = commands::get_habits(&h.state).await[0].id().to_string();
    commands::toggle_habit_completion(read_id, None, &h.state)
        .await
        .unwrap();

    let installed = h.notifier.installed().await;
    let count = |kind| installed.iter().filter(|t| t.kind() == kind).count();
    assert_eq!(count(TriggerKind::Good), 1);
    assert_eq!(count(TriggerKind::Priority), 2);
    assert_eq!(count(TriggerKind::IncompletePriority), 1);

    let digest = installed
        .iter()
        .find(|t| t.kind() == TriggerKind::IncompletePriority)
        .unwrap();
    assert_eq!(digest.title, "1 High Priority Habits Pending!");
    assert_eq!(digest.body, "Complete these important habits: Run");
}

#[tokio::test]
async fn test_disabling_priority_reminders_reschedules() {
    let h = harness().await;
    let mut habit = input("Read");
    habit.priority = "high".parse().unwrap();
    commands::add_habit(habit, &h.state).await;
    assert_eq!(h.notifier.installed().await.len(), 3);

    let saved = commands::save_settings(
        SettingsPatch {
            enable_high_priority_reminders: Some(false),
            ..SettingsPatch::default()
        },
        &h.state,
    )
    .await
    .unwrap();

    assert!(!saved.enable_high_priority_reminders);
    assert_eq!(kinds(&h.notifier).await, vec![TriggerKind::Good]);
    assert!(!commands::get_settings(&h.state).await.enable_high_priority_reminders);
}

#[tokio::test]
async fn test_session_start_resets_yesterdays_completion() {
    let h = harness().await;
    let yesterday = fixed_today() - Duration::days(1);
    let mut habit = Habit::new(HabitId::from_string("1"), HabitDetails::new("Read")).unwrap();
    habit.toggle_completion(yesterday, yesterday);
    h.store
        .set(HABITS_KEY, &serde_json::to_string(&vec![habit]).unwrap())
        .await
        .unwrap();

    let snapshot = commands::start_session(&h.state).await;

    assert_eq!(snapshot.habits.len(), 1);
    assert!(!snapshot.habits[0].is_completed());
    assert_eq!(snapshot.habits[0].streak(), 1);
    assert!(snapshot.habits[0].completed_on(yesterday));
    assert_eq!(snapshot.quote, quote_for_date(fixed_today()));
    assert_eq!(snapshot.progress.completed, 0);
    assert_eq!(snapshot.progress.total, 1);
    assert_eq!(kinds(&h.notifier).await, vec![TriggerKind::Good]);
}

#[tokio::test]
async fn test_session_without_permission_installs_nothing() {
    let h = harness().await;
    h.notifier.set_permission(false);
    commands::add_habit(input("Read"), &h.state).await;

    let snapshot = commands::start_session(&h.state).await;

    assert_eq!(snapshot.habits.len(), 1);
    assert!(h.notifier.installed().await.is_empty());
    assert_eq!(h.notifier.cancel_calls(), 0);
}

#[tokio::test]
async fn test_past_day_toggle_only_touches_history() {
    let h = harness().await;
    commands::add_habit(input("Read"), &h.state).await;
    let id = commands::get_habits(&h.state).await[0].id().to_string();
    let cancels = h.notifier.cancel_calls();

    let past = Some("2026-10-17".to_string());
    let habits = commands::toggle_habit_completion(id.clone(), past, &h.state)
        .await
        .unwrap();

    assert!(!habits[0].is_completed());
    assert_eq!(habits[0].streak(), 0);
    assert!(habits[0].completed_on(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()));
    assert_eq!(h.notifier.cancel_calls(), cancels);

    assert!(
        commands::toggle_habit_completion(id, Some("17/10/2026".to_string()), &h.state)
            .await
            .is_none()
    );

    let grid = commands::get_week_grid(Some("2026-10-17".to_string()), &h.state)
        .await
        .unwrap();
    assert!(grid.rows[0].cells[5].completed);
    assert!(commands::get_week_grid(Some("soon".to_string()), &h.state)
        .await
        .is_err());
}

#[tokio::test]
async fn test_storage_failure_leaves_collection_untouched() {
    let h = harness().await;
    commands::add_habit(input("Read"), &h.state).await;
    let id = commands::get_habits(&h.state).await[0].id().to_string();

    h.store.set_fail_writes(true);
    assert!(!commands::add_habit(input("Run"), &h.state).await);
    assert!(commands::delete_habit(id.clone(), &h.state).await.is_none());
    assert!(commands::toggle_habit_completion(id, None, &h.state).await.is_none());
    h.store.set_fail_writes(false);

    let habits = commands::get_habits(&h.state).await;
    assert_eq!(habits.len(), 1);
    assert!(!habits[0].is_completed());
}

#[tokio::test]
async fn test_edit_and_delete_flow() {
    let h = harness().await;
    commands::add_habit(input("Read"), &h.state).await;
    let id = commands::get_habits(&h.state).await[0].id().to_string();

    let mut edit = input("Read books");
    edit.reminder_interval = Some(45);
    let habits = commands::edit_habit(id.clone(), edit, &h.state).await.unwrap();
    assert_eq!(habits[0].name(), "Read books");
    assert_eq!(habits[0].reminder_interval(), Some(45));
    assert!(kinds(&h.notifier).await.contains(&TriggerKind::Custom));

    let cards = commands::get_habit_cards(&h.state).await.unwrap();
    assert_eq!(cards[0].streak_label, "🔥 0 days");
    let chart = commands::get_progress_chart(&h.state).await.unwrap();
    assert_eq!(chart[0].label, "Read boo...");

    assert!(commands::delete_habit(id, &h.state).await.unwrap().is_empty());
    assert!(h.notifier.installed().await.is_empty());
}

#[tokio::test]
async fn test_log_level_commands() {
    let h = harness().await;

    assert_eq!(commands::get_log_level(&h.state), "info");
    commands::set_log_level("debug".to_string(), &h.state).unwrap();
    assert_eq!(commands::get_log_level(&h.state), "debug");
    assert!(commands::set_log_level("chatty".to_string(), &h.state).is_err());
}

#[tokio::test]
async fn test_habits_survive_restart_with_file_store() {
    let data_dir = tempfile::tempdir().unwrap();

    let state = build_app_state(data_dir.path()).await.unwrap();
    assert!(commands::get_log_dir().is_ok());
    assert!(commands::get_app_version().starts_with(env!("CARGO_PKG_VERSION")));
    assert!(commands::add_habit(input("Read"), &state).await);
    state.shutdown().await;
    drop(state);

    let state = build_app_state(data_dir.path()).await.unwrap();
    let habits = commands::get_habits(&state).await;
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name(), "Read");
    state.shutdown().await;
}
