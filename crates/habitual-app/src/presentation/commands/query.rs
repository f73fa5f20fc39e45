use chrono::NaiveDate;

use crate::application::dtos::{ChartBarDto, HabitCardDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use habitual_domain::habit::{DailyProgress, WeekGrid};
use habitual_domain::icon::IconDescriptor;
use habitual_domain::shared::DATE_FORMAT;

/// Week grid containing `anchor` (`YYYY-MM-DD`), the current week when omitted
pub async fn get_week_grid(
    anchor: Option<String>,
    state: &AppState,
) -> Result<WeekGrid, CommandError> {
    let anchor = anchor
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, DATE_FORMAT)
                .map_err(|e| CommandError::validation(format!("Invalid date '{}': {}", raw, e)))
        })
        .transpose()?;

    Ok(state.queries.habits.week_grid(anchor).await?)
}

pub async fn get_habit_cards(state: &AppState) -> Result<Vec<HabitCardDto>, CommandError> {
    Ok(state.queries.habits.habit_cards().await?)
}

pub async fn get_daily_progress(state: &AppState) -> Result<DailyProgress, CommandError> {
    Ok(state.queries.progress.daily_progress().await?)
}

pub async fn get_progress_chart(state: &AppState) -> Result<Vec<ChartBarDto>, CommandError> {
    Ok(state.queries.progress.chart().await?)
}

pub fn list_icons(state: &AppState) -> Vec<IconDescriptor> {
    state.icons.all()
}
