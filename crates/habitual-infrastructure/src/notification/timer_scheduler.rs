use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Local, TimeZone};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant};
use tracing::{error, info, warn};

use habitual_domain::reminder::{
    NotificationMessage, NotificationScheduler, NotificationSender, Trigger, TriggerSchedule,
};
use habitual_domain::DomainError;

/// Next instant strictly after `now` whose wall clock reads `hour:minute`.
/// Skips days on which that local time does not exist.
pub fn next_daily_occurrence<Tz: TimeZone>(
    now: &DateTime<Tz>,
    hour: u8,
    minute: u8,
) -> Option<DateTime<Tz>> {
    let tz = now.timezone();
    (0..=2).find_map(|offset| {
        let date = now.date_naive() + ChronoDuration::days(offset);
        let candidate = date
            .and_hms_opt(u32::from(hour), u32::from(minute), 0)?
            .and_local_timezone(tz.clone())
            .earliest()?;
        (candidate > *now).then_some(candidate)
    })
}

/// Fires triggers from tokio timer tasks, one task per trigger
pub struct TokioNotificationScheduler {
    sender: Arc<dyn NotificationSender>,
    tasks: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl TokioNotificationScheduler {
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self {
            sender,
            tasks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn active_task_count(&self) -> usize {
        self.tasks.lock().await.len()
    }

    pub async fn shutdown(&self) {
        info!("🛑 Shutting down reminder timers");
        self.stop_all_tasks().await;
    }

    async fn stop_all_tasks(&self) {
        let mut tasks = self.tasks.lock().await;
        if !tasks.is_empty() {
            info!("🛑 Stopping {} reminder timers", tasks.len());
        }
        for handle in tasks.drain(..) {
            handle.abort();
        }
    }

    fn spawn_daily(&self, message: NotificationMessage, hour: u8, minute: u8) -> JoinHandle<()> {
        let sender = Arc::clone(&self.sender);
        tokio::spawn(async move {
            loop {
                let now = Local::now();
                let Some(next_run) = next_daily_occurrence(&now, hour, minute) else {
                    error!(
                        "❌ Cannot compute next run for '{}' at {:02}:{:02}, timer stopped",
                        message.title, hour, minute
                    );
                    break;
                };
                let wait = (next_run - now).to_std().unwrap_or(Duration::from_secs(60));

                info!(
                    "Next reminder '{}': {} (in {} seconds)",
                    message.title,
                    next_run.format("%Y-%m-%d %H:%M:%S"),
                    wait.as_secs()
                );
                tokio::time::sleep(wait).await;

                if let Err(e) = sender.send(&message).await {
                    warn!("Failed to deliver reminder '{}': {}", message.title, e);
                }
            }
        })
    }

    fn spawn_interval(&self, message: NotificationMessage, period: Duration) -> JoinHandle<()> {
        let sender = Arc::clone(&self.sender);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                if let Err(e) = sender.send(&message).await {
                    warn!("Failed to deliver reminder '{}': {}", message.title, e);
                }
            }
        })
    }
}

#[async_trait]
impl NotificationScheduler for TokioNotificationScheduler {
    async fn request_permission(&self) -> Result<bool, DomainError> {
        Ok(true)
    }

    async fn cancel_all(&self) -> Result<(), DomainError> {
        self.stop_all_tasks().await;
        Ok(())
    }

    async fn schedule(&self, trigger: &Trigger) -> Result<(), DomainError> {
        let message = NotificationMessage::from(trigger);

        let handle = match trigger.when {
            TriggerSchedule::Daily { hour, minute } => {
                if hour > 23 || minute > 59 {
                    return Err(DomainError::InvalidInput(format!(
                        "Invalid daily trigger time {hour}:{minute:02}"
                    )));
                }
                self.spawn_daily(message, hour, minute)
            }
            TriggerSchedule::Interval { seconds } => {
                if seconds == 0 {
                    return Err(DomainError::InvalidInput(
                        "Interval trigger needs a positive period".to_string(),
                    ));
                }
                self.spawn_interval(message, Duration::from_secs(seconds))
            }
        };

        self.tasks.lock().await.push(handle);
        Ok(())
    }
}
