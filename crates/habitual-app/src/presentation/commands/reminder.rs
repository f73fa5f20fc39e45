use crate::application::services::RescheduleReport;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use habitual_domain::DomainError;

pub async fn request_notification_permission(state: &AppState) -> bool {
    state.services.reminders.request_permission().await
}

/// Rebuild every reminder from the stored habits and settings
pub async fn reschedule_reminders(state: &AppState) -> Result<RescheduleReport, CommandError> {
    let report = state
        .services
        .reminders
        .reschedule_latest(|| async {
            let habits = state.repositories.habit.load_all().await?;
            Ok::<_, DomainError>((habits, state.services.settings.load().await))
        })
        .await?;
    Ok(report)
}

pub async fn cancel_all_reminders(state: &AppState) -> bool {
    state.services.reminders.cancel_all().await
}
