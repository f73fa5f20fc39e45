use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::dtos::HabitCardDto;
use habitual_domain::habit::{HabitRepository, WeekGrid};
use habitual_domain::icon::IconRegistry;
use habitual_domain::shared::{self, DomainError};

/// Read-only views over the habit collection
pub struct HabitQueries {
    habit_repo: Arc<dyn HabitRepository>,
    icons: Arc<dyn IconRegistry>,
    today: fn() -> NaiveDate,
}

impl HabitQueries {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, icons: Arc<dyn IconRegistry>) -> Self {
        Self {
            habit_repo,
            icons,
            today: shared::today,
        }
    }

    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Week grid around `anchor`, defaulting to the current week
    pub async fn week_grid(&self, anchor: Option<NaiveDate>) -> Result<WeekGrid, DomainError> {
        let today = (self.today)();
        let habits = self.habit_repo.load_all().await?;
        Ok(WeekGrid::build(&habits, anchor.unwrap_or(today), today))
    }

    pub async fn habit_cards(&self) -> Result<Vec<HabitCardDto>, DomainError> {
        let habits = self.habit_repo.load_all().await?;
        Ok(habits
            .iter()
            .map(|habit| HabitCardDto::new(habit, self.icons.resolve(habit.icon())))
            .collect())
    }
}
