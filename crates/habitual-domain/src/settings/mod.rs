use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Local time of day, `HH:MM` in 24h form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReminderTime {
    hour: u8,
    minute: u8,
}

impl ReminderTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::Validation(format!(
                "Reminder time out of range: {hour:02}:{minute:02}"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl Default for ReminderTime {
    fn default() -> Self {
        Self {
            hour: 18,
            minute: 0,
        }
    }
}

impl FromStr for ReminderTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidInput(format!("Invalid reminder time: {s}"));

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour = hour.parse::<u8>().map_err(|_| invalid())?;
        let minute = minute.parse::<u8>().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ReminderTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReminderTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-category notification switches. Stored and editable; reminder derivation does not read them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationToggles {
    pub daily_reminders: bool,
    pub priority_reminders: bool,
    pub bad_habit_reminders: bool,
    pub custom_reminders: bool,
}

impl Default for NotificationToggles {
    fn default() -> Self {
        Self {
            daily_reminders: true,
            priority_reminders: true,
            bad_habit_reminders: true,
            custom_reminders: true,
        }
    }
}

/// User settings. Missing fields in a stored blob take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub high_priority_reminder_time: ReminderTime,
    pub enable_high_priority_reminders: bool,
    pub notifications: NotificationToggles,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_priority_reminder_time: ReminderTime::default(),
            enable_high_priority_reminders: true,
            notifications: NotificationToggles::default(),
        }
    }
}

/// Partial settings change; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub high_priority_reminder_time: Option<ReminderTime>,
    pub enable_high_priority_reminders: Option<bool>,
    pub notifications: Option<NotificationToggles>,
}

impl Settings {
    pub fn apply(&self, patch: SettingsPatch) -> Settings {
        Settings {
            high_priority_reminder_time: patch
                .high_priority_reminder_time
                .unwrap_or(self.high_priority_reminder_time),
            enable_high_priority_reminders: patch
                .enable_high_priority_reminders
                .unwrap_or(self.enable_high_priority_reminders),
            notifications: patch.notifications.unwrap_or(self.notifications),
        }
    }
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// `None` when nothing has been stored yet
    async fn load(&self) -> Result<Option<Settings>, DomainError>;
    async fn save(&self, settings: &Settings) -> Result<(), DomainError>;
}
