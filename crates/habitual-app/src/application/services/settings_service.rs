use chrono::Utc;
use log::{error, info, warn};
use std::sync::Arc;

use habitual_domain::events::{EventBus, SettingsUpdated};
use habitual_domain::settings::{Settings, SettingsPatch, SettingsRepository};

/// Loads and persists user settings. Stored values are merged over defaults.
pub struct SettingsService {
    settings_repo: Arc<dyn SettingsRepository>,
    event_bus: Arc<dyn EventBus>,
}

impl SettingsService {
    pub fn new(settings_repo: Arc<dyn SettingsRepository>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            settings_repo,
            event_bus,
        }
    }

    pub async fn load(&self) -> Settings {
        match self.settings_repo.load().await {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                warn!("Unreadable settings, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    /// Merge `patch` over the current settings and persist. `None` when the write fails.
    pub async fn save(&self, patch: SettingsPatch) -> Option<Settings> {
        let merged = self.load().await.apply(patch);

        if let Err(e) = self.settings_repo.save(&merged).await {
            error!("Failed to save settings: {}", e.format_with_code());
            return None;
        }
        info!(
            "Settings saved (priority reminders: {}, at {})",
            merged.enable_high_priority_reminders, merged.high_priority_reminder_time
        );

        let event = SettingsUpdated {
            enable_high_priority_reminders: merged.enable_high_priority_reminders,
            high_priority_reminder_time: merged.high_priority_reminder_time.to_string(),
            occurred_at: Utc::now(),
        };
        if let Err(e) = self.event_bus.publish(Box::new(event)).await {
            warn!("Failed to publish settings update: {}", e);
        }

        Some(merged)
    }

    pub async fn is_high_priority_reminders_enabled(&self) -> bool {
        self.load().await.enable_high_priority_reminders
    }
}
