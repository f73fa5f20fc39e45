use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::value_objects::{deserialize_icon_ref, HabitDetails, HabitType, Priority};
use crate::shared::{DomainError, HabitId};

/// Habit aggregate root
///
/// `completed` caches today's entry of `completion_history`; the daily reset clears it
/// while the history itself is permanent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    id: HabitId,
    name: String,
    #[serde(default, deserialize_with = "deserialize_icon_ref")]
    icon: Option<String>,
    #[serde(rename = "type", default)]
    habit_type: HabitType,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    reminder_interval: Option<u32>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    streak: u32,
    #[serde(default)]
    last_completed: Option<NaiveDate>,
    #[serde(default)]
    completion_history: BTreeMap<NaiveDate, bool>,
    #[serde(default)]
    failed_days: u32,
    #[serde(default)]
    last_failed: Option<NaiveDate>,
}

impl Habit {
    pub fn new(id: HabitId, details: HabitDetails) -> Result<Self, DomainError> {
        let details = details.validated()?;

        Ok(Self {
            id,
            name: details.name,
            icon: details.icon,
            habit_type: details.habit_type,
            priority: details.priority,
            reminder_interval: details.reminder_interval,
            completed: false,
            streak: 0,
            last_completed: None,
            completion_history: BTreeMap::new(),
            failed_days: 0,
            last_failed: None,
        })
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn habit_type(&self) -> HabitType {
        self.habit_type
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn reminder_interval(&self) -> Option<u32> {
        self.reminder_interval.filter(|minutes| *minutes > 0)
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.last_completed
    }

    pub fn completion_history(&self) -> &BTreeMap<NaiveDate, bool> {
        &self.completion_history
    }

    pub fn failed_days(&self) -> u32 {
        self.failed_days
    }

    pub fn last_failed(&self) -> Option<NaiveDate> {
        self.last_failed
    }

    pub fn is_bad(&self) -> bool {
        matches!(self.habit_type, HabitType::Bad)
    }

    pub fn is_high_priority(&self) -> bool {
        matches!(self.priority, Priority::High)
    }

    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.completion_history.get(&date).copied().unwrap_or(false)
    }

    pub fn details(&self) -> HabitDetails {
        HabitDetails {
            name: self.name.clone(),
            icon: self.icon.clone(),
            habit_type: self.habit_type,
            priority: self.priority,
            reminder_interval: self.reminder_interval,
        }
    }

    /// Apply the edit flow; streak, history and today's state are kept
    pub fn edit(&mut self, details: HabitDetails) -> Result<(), DomainError> {
        let details = details.validated()?;
        self.name = details.name;
        self.icon = details.icon;
        self.habit_type = details.habit_type;
        self.priority = details.priority;
        self.reminder_interval = details.reminder_interval;
        Ok(())
    }

    /// Flip the completion entry for `date` and return the new value.
    ///
    /// Only a toggle of `today` touches the cached fields. Un-completing a bad habit
    /// leaves its streak and failure count alone.
    pub fn toggle_completion(&mut self, date: NaiveDate, today: NaiveDate) -> bool {
        let now_completed = !self.completed_on(date);
        self.completion_history.insert(date, now_completed);

        if date != today {
            return now_completed;
        }

        self.completed = now_completed;
        if now_completed {
            self.streak = self.streak.saturating_add(1);
            self.last_completed = Some(today);
            self.failed_days = 0;
            self.last_failed = None;
        } else {
            self.last_completed = None;
            match self.habit_type {
                HabitType::Good => {
                    self.streak = 0;
                    self.failed_days = self.failed_days.saturating_add(1);
                    self.last_failed = Some(today);
                }
                HabitType::Bad => {}
            }
        }

        now_completed
    }

    /// Clear the `completed` cache when it was not set today. Returns whether anything changed.
    pub fn reset_for_day(&mut self, today: NaiveDate) -> bool {
        if self.last_completed == Some(today) || !self.completed {
            return false;
        }
        self.completed = false;
        true
    }

    /// Short status line shown next to the habit
    pub fn streak_label(&self) -> String {
        fn days(n: u32) -> &'static str {
            if n == 1 {
                "day"
            } else {
                "days"
            }
        }

        match self.habit_type {
            HabitType::Bad if self.streak > 0 => {
                format!("⚠️ {} {} streak", self.streak, days(self.streak))
            }
            HabitType::Bad => format!("✅ {} clean days", self.streak),
            HabitType::Good if self.failed_days > 0 => {
                format!("💔 {} {} missed", self.failed_days, days(self.failed_days))
            }
            HabitType::Good => format!("🔥 {} {}", self.streak, days(self.streak)),
        }
    }
}
