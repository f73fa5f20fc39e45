use async_trait::async_trait;
use log::{debug, error, info};
use std::sync::Arc;

use crate::application::services::{ReminderScheduler, SettingsService};
use habitual_domain::events::{
    DailyCompletionsReset, EventHandler, HabitCreated, HabitDeleted, HabitToggled, HabitUpdated,
    SettingsUpdated,
};
use habitual_domain::habit::HabitRepository;
use habitual_domain::shared::DomainError;

/// Rebuilds the installed reminders whenever habits or settings change.
///
/// Reads habits through the repository, not the store, so it never waits on
/// the store's write guard. The read happens inside the reschedule pass, so the
/// pass that runs last installs the newest collection.
#[derive(Clone)]
pub struct SchedulerReloadEventHandler {
    reminders: Arc<ReminderScheduler>,
    habit_repo: Arc<dyn HabitRepository>,
    settings: Arc<SettingsService>,
}

impl SchedulerReloadEventHandler {
    pub fn new(
        reminders: Arc<ReminderScheduler>,
        habit_repo: Arc<dyn HabitRepository>,
        settings: Arc<SettingsService>,
    ) -> Self {
        Self {
            reminders,
            habit_repo,
            settings,
        }
    }

    async fn reload_reminders(&self) -> Result<(), DomainError> {
        info!("Reloading reminders due to habit change");

        let report = self
            .reminders
            .reschedule_latest(|| async {
                let habits = self.habit_repo.load_all().await.map_err(|e| {
                    error!("Failed to load habits for reminder reload: {}", e);
                    e
                })?;
                Ok::<_, DomainError>((habits, self.settings.load().await))
            })
            .await?;

        if report.failed > 0 {
            return Err(DomainError::Notification(format!(
                "{} of {} reminders could not be installed",
                report.failed, report.derived
            )));
        }

        info!("Reminders reloaded successfully");
        Ok(())
    }
}

#[async_trait]
impl EventHandler<HabitCreated> for SchedulerReloadEventHandler {
    async fn handle(&self, event: &HabitCreated) -> Result<(), DomainError> {
        info!(
            "Handling HabitCreated event for habit: {} ({})",
            event.name, event.habit_id
        );
        self.reload_reminders().await
    }
}

#[async_trait]
impl EventHandler<HabitToggled> for SchedulerReloadEventHandler {
    async fn handle(&self, event: &HabitToggled) -> Result<(), DomainError> {
        if !event.affects_today {
            debug!(
                "Toggle of habit {} on {} leaves today untouched, skipping reminder reload",
                event.habit_id, event.date
            );
            return Ok(());
        }
        info!(
            "Handling HabitToggled event for habit: {} (completed: {})",
            event.habit_id, event.completed
        );
        self.reload_reminders().await
    }
}

#[async_trait]
impl EventHandler<HabitUpdated> for SchedulerReloadEventHandler {
    async fn handle(&self, event: &HabitUpdated) -> Result<(), DomainError> {
        info!("Handling HabitUpdated event for habit: {}", event.habit_id);
        self.reload_reminders().await
    }
}

#[async_trait]
impl EventHandler<HabitDeleted> for SchedulerReloadEventHandler {
    async fn handle(&self, event: &HabitDeleted) -> Result<(), DomainError> {
        info!("Handling HabitDeleted event for habit: {}", event.habit_id);
        self.reload_reminders().await
    }
}

#[async_trait]
impl EventHandler<DailyCompletionsReset> for SchedulerReloadEventHandler {
    async fn handle(&self, event: &DailyCompletionsReset) -> Result<(), DomainError> {
        info!(
            "Handling DailyCompletionsReset event ({} habits reset)",
            event.reset_count
        );
        self.reload_reminders().await
    }
}

#[async_trait]
impl EventHandler<SettingsUpdated> for SchedulerReloadEventHandler {
    async fn handle(&self, event: &SettingsUpdated) -> Result<(), DomainError> {
        info!(
            "Handling SettingsUpdated event (priority reminders: {}, time: {})",
            event.enable_high_priority_reminders, event.high_priority_reminder_time
        );
        self.reload_reminders().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use habitual_domain::events::{DomainEvent, EventBus};
    use habitual_domain::habit::{Habit, HabitDetails, Priority};
    use habitual_domain::reminder::{NotificationScheduler, Trigger};
    use habitual_domain::settings::{Settings, SettingsRepository};
    use habitual_domain::HabitId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    struct StaticHabits(Vec<Habit>);

    #[async_trait]
    impl HabitRepository for StaticHabits {
        async fn load_all(&self) -> Result<Vec<Habit>, DomainError> {
            Ok(self.0.clone())
        }

        async fn save_all(&self, _habits: &[Habit]) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct NoSettings;

    #[async_trait]
    impl SettingsRepository for NoSettings {
        async fn load(&self) -> Result<Option<Settings>, DomainError> {
            Ok(None)
        }

        async fn save(&self, _settings: &Settings) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct NullBus;

    #[async_trait]
    impl EventBus for NullBus {
        async fn publish(&self, _event: Box<dyn DomainEvent>) -> Result<(), DomainError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        cancels: AtomicUsize,
        installed: RwLock<Vec<Trigger>>,
    }

    #[async_trait]
    impl NotificationScheduler for RecordingNotifier {
        async fn request_permission(&self) -> Result<bool, DomainError> {
            Ok(true)
        }

        async fn cancel_all(&self) -> Result<(), DomainError> {
            self.cancels.fetch_add(1, Ordering::SeqCst);
            self.installed.write().await.clear();
            Ok(())
        }

        async fn schedule(&self, trigger: &Trigger) -> Result<(), DomainError> {
            self.installed.write().await.push(trigger.clone());
            Ok(())
        }
    }

    fn handler(habits: Vec<Habit>) -> (SchedulerReloadEventHandler, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let handler = SchedulerReloadEventHandler::new(
            Arc::new(ReminderScheduler::new(notifier.clone())),
            Arc::new(StaticHabits(habits)),
            Arc::new(SettingsService::new(Arc::new(NoSettings), Arc::new(NullBus))),
        );
        (handler, notifier)
    }

    fn urgent_habit() -> Habit {
        Habit::new(
            HabitId::from_string("1"),
            HabitDetails::new("Drink water").with_priority(Priority::High),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_created_event_rebuilds_triggers() {
        let (handler, notifier) = handler(vec![urgent_habit()]);

        handler
            .handle(&HabitCreated {
                habit_id: HabitId::from_string("1"),
                name: "Drink water".to_string(),
                occurred_at: Utc::now(),
            })
            .await
            .unwrap();

        assert_eq!(notifier.cancels.load(Ordering::SeqCst), 1);
        // good reminder, priority reminder, incomplete digest
        assert_eq!(notifier.installed.read().await.len(), 3);
    }

    #[tokio::test]
    async fn test_past_toggle_skips_reload() {
        let (handler, notifier) = handler(vec![urgent_habit()]);

        handler
            .handle(&HabitToggled {
                habit_id: HabitId::from_string("1"),
                date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
                completed: true,
                affects_today: false,
                occurred_at: Utc::now(),
            })
            .await
            .unwrap();

        assert_eq!(notifier.cancels.load(Ordering::SeqCst), 0);
        assert!(notifier.installed.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_settings_event_rebuilds_triggers() {
        let (handler, notifier) = handler(Vec::new());

        handler
            .handle(&SettingsUpdated {
                enable_high_priority_reminders: false,
                high_priority_reminder_time: "07:30".to_string(),
                occurred_at: Utc::now(),
            })
            .await
            .unwrap();

        assert_eq!(notifier.cancels.load(Ordering::SeqCst), 1);
    }
}
