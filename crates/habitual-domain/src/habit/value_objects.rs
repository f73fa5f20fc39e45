use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Whether the habit is something to build or something to avoid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitType {
    #[default]
    Good,
    Bad,
}

impl HabitType {
    pub fn as_str(&self) -> &str {
        match self {
            HabitType::Good => "good",
            HabitType::Bad => "bad",
        }
    }
}

impl FromStr for HabitType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(HabitType::Good),
            "bad" => Ok(HabitType::Bad),
            _ => Err(DomainError::InvalidInput(format!("Unknown habit type: {s}"))),
        }
    }
}

impl fmt::Display for HabitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            _ => Err(DomainError::InvalidInput(format!("Unknown priority: {s}"))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Editable part of a habit, shared by creation and the edit flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitDetails {
    pub name: String,
    pub icon: Option<String>,
    pub habit_type: HabitType,
    pub priority: Priority,
    /// Minutes between custom reminders
    pub reminder_interval: Option<u32>,
}

impl HabitDetails {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            habit_type: HabitType::Good,
            priority: Priority::Normal,
            reminder_interval: None,
        }
    }

    pub fn with_icon(mut self, icon_id: impl Into<String>) -> Self {
        self.icon = Some(icon_id.into());
        self
    }

    pub fn with_type(mut self, habit_type: HabitType) -> Self {
        self.habit_type = habit_type;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_reminder_interval(mut self, minutes: u32) -> Self {
        self.reminder_interval = Some(minutes);
        self
    }

    /// Trim the name, reject blank names and drop a zero interval
    pub(crate) fn validated(self) -> Result<Self, DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Habit name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            reminder_interval: self.reminder_interval.filter(|minutes| *minutes > 0),
            ..self
        })
    }
}

/// Icons were once stored as embedded `{id, emoji, label}` objects; only the id is kept now.
pub(crate) fn deserialize_icon_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IconRef {
        Id(String),
        Embedded { id: String },
    }

    Ok(Option::<IconRef>::deserialize(deserializer)?.map(|icon| match icon {
        IconRef::Id(id) | IconRef::Embedded { id } => id,
    }))
}
