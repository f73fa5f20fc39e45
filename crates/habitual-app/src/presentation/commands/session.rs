use log::{info, warn};

use crate::application::dtos::SessionSnapshot;
use crate::presentation::state::AppState;
use habitual_domain::habit::DailyProgress;
use habitual_domain::DomainError;

/// Day-boundary routine run when the app comes to the foreground:
/// reset stale completions, load habits and the quote, then rebuild reminders.
pub async fn start_session(state: &AppState) -> SessionSnapshot {
    if state.services.habits.reset_daily_completions().await.is_none() {
        warn!("Daily reset failed, continuing with stored habits");
    }

    let habits = state.services.habits.list_habits().await;
    let quote = state.services.quotes.daily_quote().await;

    if state.services.reminders.request_permission().await {
        let outcome = state
            .services
            .reminders
            .reschedule_latest(|| async {
                let habits = state.repositories.habit.load_all().await?;
                Ok::<_, DomainError>((habits, state.services.settings.load().await))
            })
            .await;
        match outcome {
            Ok(report) => info!(
                "Session started with {} habits, {} reminders installed",
                habits.len(),
                report.scheduled
            ),
            Err(e) => warn!("Failed to reschedule reminders at session start: {}", e),
        }
    }

    let progress = DailyProgress::from_habits(&habits);
    SessionSnapshot {
        habits,
        quote,
        progress,
    }
}

pub async fn get_daily_quote(state: &AppState) -> String {
    state.services.quotes.daily_quote().await
}
