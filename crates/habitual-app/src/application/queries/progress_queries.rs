use std::sync::Arc;

use crate::application::dtos::ChartBarDto;
use habitual_domain::habit::{DailyProgress, HabitRepository};
use habitual_domain::shared::DomainError;

const CHART_MAX_BARS: usize = 10;
const CHART_LABEL_CHARS: usize = 8;

pub struct ProgressQueries {
    habit_repo: Arc<dyn HabitRepository>,
}

impl ProgressQueries {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }

    pub async fn daily_progress(&self) -> Result<DailyProgress, DomainError> {
        let habits = self.habit_repo.load_all().await?;
        Ok(DailyProgress::from_habits(&habits))
    }

    /// Streak bars for the first habits in collection order
    pub async fn chart(&self) -> Result<Vec<ChartBarDto>, DomainError> {
        let habits = self.habit_repo.load_all().await?;
        Ok(habits
            .iter()
            .take(CHART_MAX_BARS)
            .map(|habit| ChartBarDto {
                habit_id: habit.id().to_string(),
                label: chart_label(habit.name()),
                streak: habit.streak(),
            })
            .collect())
    }
}

fn chart_label(name: &str) -> String {
    if name.chars().count() > CHART_LABEL_CHARS {
        let head: String = name.chars().take(CHART_LABEL_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}
