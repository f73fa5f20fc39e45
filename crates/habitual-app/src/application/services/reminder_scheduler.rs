use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, instrument, warn};

use habitual_domain::habit::Habit;
use habitual_domain::reminder::{derive_triggers, NotificationScheduler};
use habitual_domain::settings::Settings;
use habitual_domain::DomainError;

/// Outcome of one reschedule pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleReport {
    pub permission_granted: bool,
    pub derived: usize,
    pub scheduled: usize,
    pub failed: usize,
}

/// Keeps the installed reminders in line with the habit collection.
///
/// Each pass cancels everything and installs the freshly derived set. Passes run one
/// at a time under `pass_guard`. Failures are logged and never propagate: habit
/// tracking keeps working without reminders.
pub struct ReminderScheduler {
    notifier: Arc<dyn NotificationScheduler>,
    permission: RwLock<Option<bool>>,
    pass_guard: Mutex<()>,
}

impl ReminderScheduler {
    pub fn new(notifier: Arc<dyn NotificationScheduler>) -> Self {
        Self {
            notifier,
            permission: RwLock::new(None),
            pass_guard: Mutex::new(()),
        }
    }

    /// Ask the platform for permission and remember the answer
    pub async fn request_permission(&self) -> bool {
        let granted = match self.notifier.request_permission().await {
            Ok(granted) => granted,
            Err(e) => {
                warn!("Notification permission request failed: {}", e);
                false
            }
        };
        if !granted {
            info!("Notification permissions not granted");
        }
        *self.permission.write().await = Some(granted);
        granted
    }

    async fn has_permission(&self) -> bool {
        let cached = *self.permission.read().await;
        match cached {
            Some(granted) => granted,
            None => self.request_permission().await,
        }
    }

    /// Install the triggers derived from `habits` and `settings`
    #[instrument(skip_all, fields(habits = habits.len()))]
    pub async fn reschedule(&self, habits: &[Habit], settings: &Settings) -> RescheduleReport {
        let _pass = self.pass_guard.lock().await;
        self.run_pass(habits, settings).await
    }

    /// Load the current habits and settings and reschedule from them, all within one pass.
    ///
    /// The snapshot is read after earlier passes finish, so the last pass always
    /// installs the latest state.
    pub async fn reschedule_latest<F, Fut>(
        &self,
        load: F,
    ) -> Result<RescheduleReport, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(Vec<Habit>, Settings), DomainError>>,
    {
        let _pass = self.pass_guard.lock().await;
        let (habits, settings) = load().await?;
        Ok(self.run_pass(&habits, &settings).await)
    }

    async fn run_pass(&self, habits: &[Habit], settings: &Settings) -> RescheduleReport {
        if !self.has_permission().await {
            return RescheduleReport::default();
        }

        let triggers = derive_triggers(habits, settings);
        let mut report = RescheduleReport {
            permission_granted: true,
            derived: triggers.len(),
            ..RescheduleReport::default()
        };

        if let Err(e) = self.notifier.cancel_all().await {
            error!("❌ Failed to cancel existing reminders, keeping them: {}", e);
            report.failed = triggers.len();
            return report;
        }

        for trigger in &triggers {
            match self.notifier.schedule(trigger).await {
                Ok(()) => report.scheduled += 1,
                Err(e) => {
                    report.failed += 1;
                    warn!(
                        "Failed to schedule {:?} reminder '{}' ({}): {}",
                        trigger.kind(),
                        trigger.title,
                        trigger.when,
                        e
                    );
                }
            }
        }

        info!(
            "✅ Scheduled {}/{} reminders",
            report.scheduled, report.derived
        );
        report
    }

    pub async fn cancel_all(&self) -> bool {
        let _pass = self.pass_guard.lock().await;
        match self.notifier.cancel_all().await {
            Ok(()) => {
                info!("All reminders cancelled");
                true
            }
            Err(e) => {
                error!("Failed to cancel reminders: {}", e);
                false
            }
        }
    }
}
