use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use super::aggregate::Habit;
use crate::shared::HabitId;

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekCell {
    pub date: NaiveDate,
    pub completed: bool,
    pub is_today: bool,
    /// A past day that was never marked done
    pub missed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRow {
    pub habit_id: HabitId,
    pub name: String,
    pub cells: Vec<WeekCell>,
}

/// Seven-day completion grid, one row per habit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGrid {
    pub start: NaiveDate,
    pub today: NaiveDate,
    pub days: Vec<NaiveDate>,
    pub rows: Vec<WeekRow>,
}

impl WeekGrid {
    /// Build the grid for the week containing `anchor`
    pub fn build(habits: &[Habit], anchor: NaiveDate, today: NaiveDate) -> Self {
        let start = week_start(anchor);
        let days: Vec<NaiveDate> = (0..7).map(|offset| start + Duration::days(offset)).collect();

        let rows = habits
            .iter()
            .map(|habit| WeekRow {
                habit_id: habit.id().clone(),
                name: habit.name().to_string(),
                cells: days
                    .iter()
                    .map(|&date| {
                        let completed = habit.completed_on(date);
                        WeekCell {
                            date,
                            completed,
                            is_today: date == today,
                            missed: date < today && !completed,
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            start,
            today,
            days,
            rows,
        }
    }

    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn previous_start(&self) -> NaiveDate {
        self.start - Duration::weeks(1)
    }

    pub fn next_start(&self) -> NaiveDate {
        self.start + Duration::weeks(1)
    }
}

/// Today's progress summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProgress {
    pub completed: usize,
    pub total: usize,
    pub ratio: f64,
}

impl DailyProgress {
    pub fn from_habits(habits: &[Habit]) -> Self {
        let total = habits.len();
        let completed = habits.iter().filter(|h| h.is_completed()).count();
        let ratio = if total > 0 {
            completed as f64 / total as f64
        } else {
            0.0
        };

        Self {
            completed,
            total,
            ratio,
        }
    }
}
