use serde::{Deserialize, Serialize};

use habitual_domain::habit::{DailyProgress, Habit, HabitDetails, HabitType, Priority};
use habitual_domain::icon::IconDescriptor;
use habitual_domain::shared::DATE_FORMAT;

/// Habit as shown on the home list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCardDto {
    pub id: String,
    pub name: String,
    pub icon: IconDescriptor,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    pub priority: Priority,
    pub completed: bool,
    pub streak: u32,
    pub streak_label: String,
    pub last_completed: Option<String>, // YYYY-MM-DD
    pub reminder_interval: Option<u32>,
}

impl HabitCardDto {
    pub fn new(habit: &Habit, icon: IconDescriptor) -> Self {
        Self {
            id: habit.id().to_string(),
            name: habit.name().to_string(),
            icon,
            habit_type: habit.habit_type(),
            priority: habit.priority(),
            completed: habit.is_completed(),
            streak: habit.streak(),
            streak_label: habit.streak_label(),
            last_completed: habit
                .last_completed()
                .map(|d| d.format(DATE_FORMAT).to_string()),
            reminder_interval: habit.reminder_interval(),
        }
    }
}

/// One bar of the streak chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBarDto {
    pub habit_id: String,
    pub label: String,
    pub streak: u32,
}

/// Everything the home screen needs after the day-boundary routine
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub habits: Vec<Habit>,
    pub quote: String,
    pub progress: DailyProgress,
}

/// Form input for adding or editing a habit
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddHabitInput {
    pub name: String,
    pub icon: Option<String>,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    pub priority: Priority,
    pub reminder_interval: Option<u32>,
}

impl From<AddHabitInput> for HabitDetails {
    fn from(input: AddHabitInput) -> Self {
        let mut details = HabitDetails::new(input.name)
            .with_type(input.habit_type)
            .with_priority(input.priority);
        if let Some(icon) = input.icon {
            details = details.with_icon(icon);
        }
        if let Some(minutes) = input.reminder_interval {
            details = details.with_reminder_interval(minutes);
        }
        details
    }
}
