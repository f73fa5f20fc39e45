use chrono::NaiveDate;
use log::warn;

use crate::application::dtos::AddHabitInput;
use crate::presentation::state::AppState;
use habitual_domain::habit::{Habit, HabitDetails};
use habitual_domain::shared::DATE_FORMAT;
use habitual_domain::HabitId;

pub async fn get_habits(state: &AppState) -> Vec<Habit> {
    state.services.habits.list_habits().await
}

/// Add a habit; a random built-in icon is picked when none is given
pub async fn add_habit(input: AddHabitInput, state: &AppState) -> bool {
    let mut details = HabitDetails::from(input);
    if details.icon.is_none() {
        details.icon = Some(state.icons.random_icon().id);
    }
    state.services.habits.add_habit(details).await
}

/// `date` is `YYYY-MM-DD`; today when omitted
pub async fn toggle_habit_completion(
    habit_id: String,
    date: Option<String>,
    state: &AppState,
) -> Option<Vec<Habit>> {
    let date = match date {
        Some(raw) => match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(e) => {
                warn!("Rejected toggle of habit {}: bad date '{}': {}", habit_id, raw, e);
                return None;
            }
        },
        None => None,
    };

    state
        .services
        .habits
        .toggle_habit_completion(&HabitId::from_string(&habit_id), date)
        .await
}

pub async fn update_habit(habit: Habit, state: &AppState) -> Option<Vec<Habit>> {
    state.services.habits.update_habit(habit).await
}

pub async fn edit_habit(
    habit_id: String,
    input: AddHabitInput,
    state: &AppState,
) -> Option<Vec<Habit>> {
    state
        .services
        .habits
        .edit_habit(&HabitId::from_string(&habit_id), input.into())
        .await
}

pub async fn delete_habit(habit_id: String, state: &AppState) -> Option<Vec<Habit>> {
    state
        .services
        .habits
        .delete_habit(&HabitId::from_string(&habit_id))
        .await
}

pub async fn reset_daily_completions(state: &AppState) -> Option<Vec<Habit>> {
    state.services.habits.reset_daily_completions().await
}
