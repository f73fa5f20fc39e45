use chrono::{NaiveDate, Utc};
use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use habitual_domain::events::{
    DailyCompletionsReset, DomainEvent, EventBus, HabitCreated, HabitDeleted, HabitToggled,
    HabitUpdated,
};
use habitual_domain::habit::{Habit, HabitDetails, HabitRepository};
use habitual_domain::shared::{self, DATE_FORMAT};
use habitual_domain::HabitId;

/// Owner of the habit collection.
///
/// Every operation reads the whole collection, transforms it and writes it back
/// while holding `write_guard`, so callers only ever observe complete snapshots.
/// Storage failures are logged and reported as `false` / `None`.
pub struct HabitStore {
    habit_repo: Arc<dyn HabitRepository>,
    event_bus: Arc<dyn EventBus>,
    write_guard: Mutex<()>,
    today: fn() -> NaiveDate,
}

impl HabitStore {
    pub fn new(habit_repo: Arc<dyn HabitRepository>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            habit_repo,
            event_bus,
            write_guard: Mutex::new(()),
            today: shared::today,
        }
    }

    /// Override the calendar used to decide what "today" is
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    pub async fn list_habits(&self) -> Vec<Habit> {
        let _guard = self.write_guard.lock().await;
        self.load("list_habits").await.unwrap_or_default()
    }

    pub async fn add_habit(&self, details: HabitDetails) -> bool {
        let guard = self.write_guard.lock().await;

        let Some(mut habits) = self.load("add_habit").await else {
            return false;
        };

        let mut id = HabitId::from_creation_time(Utc::now());
        while habits.iter().any(|h| h.id() == &id) {
            id = id.successor();
        }

        let habit = match Habit::new(id, details) {
            Ok(habit) => habit,
            Err(e) => {
                warn!("Rejected new habit: {}", e);
                return false;
            }
        };

        let event = HabitCreated {
            habit_id: habit.id().clone(),
            name: habit.name().to_string(),
            occurred_at: Utc::now(),
        };
        habits.push(habit);

        if !self.save("add_habit", &habits).await {
            return false;
        }
        info!("Habit created: {} ({})", event.name, event.habit_id);

        drop(guard);
        self.publish(Box::new(event)).await;
        true
    }

    /// Flip the completion of `habit_id` on `date` (today when `None`)
    pub async fn toggle_habit_completion(
        &self,
        habit_id: &HabitId,
        date: Option<NaiveDate>,
    ) -> Option<Vec<Habit>> {
        let guard = self.write_guard.lock().await;
        let today = self.today();
        let date = date.unwrap_or(today);

        let mut habits = self.load("toggle_habit_completion").await?;

        let Some(habit) = habits.iter_mut().find(|h| h.id() == habit_id) else {
            debug!("Toggle ignored, habit {} not found", habit_id);
            return Some(habits);
        };
        let completed = habit.toggle_completion(date, today);

        if !self.save("toggle_habit_completion", &habits).await {
            return None;
        }
        debug!(
            "Habit {} marked {} for {}",
            habit_id,
            if completed { "done" } else { "not done" },
            date.format(DATE_FORMAT)
        );

        drop(guard);
        self.publish(Box::new(HabitToggled {
            habit_id: habit_id.clone(),
            date,
            completed,
            affects_today: date == today,
            occurred_at: Utc::now(),
        }))
        .await;
        Some(habits)
    }

    /// Replace the habit carrying the same id wholesale
    pub async fn update_habit(&self, updated: Habit) -> Option<Vec<Habit>> {
        if updated.name().trim().is_empty() {
            warn!("Rejected update of habit {}: empty name", updated.id());
            return None;
        }

        let guard = self.write_guard.lock().await;
        let mut habits = self.load("update_habit").await?;

        let Some(slot) = habits.iter_mut().find(|h| h.id() == updated.id()) else {
            debug!("Update ignored, habit {} not found", updated.id());
            return Some(habits);
        };
        let event = HabitUpdated {
            habit_id: updated.id().clone(),
            name: updated.name().to_string(),
            occurred_at: Utc::now(),
        };
        *slot = updated;

        if !self.save("update_habit", &habits).await {
            return None;
        }

        drop(guard);
        self.publish(Box::new(event)).await;
        Some(habits)
    }

    /// Edit flow: apply new details to the stored habit, keeping its progress
    pub async fn edit_habit(&self, habit_id: &HabitId, details: HabitDetails) -> Option<Vec<Habit>> {
        let guard = self.write_guard.lock().await;
        let mut habits = self.load("edit_habit").await?;

        let Some(habit) = habits.iter_mut().find(|h| h.id() == habit_id) else {
            debug!("Edit ignored, habit {} not found", habit_id);
            return Some(habits);
        };
        if let Err(e) = habit.edit(details) {
            warn!("Rejected edit of habit {}: {}", habit_id, e);
            return None;
        }
        let event = HabitUpdated {
            habit_id: habit_id.clone(),
            name: habit.name().to_string(),
            occurred_at: Utc::now(),
        };

        if !self.save("edit_habit", &habits).await {
            return None;
        }

        drop(guard);
        self.publish(Box::new(event)).await;
        Some(habits)
    }

    pub async fn delete_habit(&self, habit_id: &HabitId) -> Option<Vec<Habit>> {
        let guard = self.write_guard.lock().await;
        let mut habits = self.load("delete_habit").await?;

        let before = habits.len();
        habits.retain(|h| h.id() != habit_id);
        if habits.len() == before {
            debug!("Delete ignored, habit {} not found", habit_id);
            return Some(habits);
        }

        if !self.save("delete_habit", &habits).await {
            return None;
        }
        info!("Habit deleted: {}", habit_id);

        drop(guard);
        self.publish(Box::new(HabitDeleted {
            habit_id: habit_id.clone(),
            occurred_at: Utc::now(),
        }))
        .await;
        Some(habits)
    }

    /// Clear `completed` on every habit not completed today. Idempotent within a day.
    pub async fn reset_daily_completions(&self) -> Option<Vec<Habit>> {
        let guard = self.write_guard.lock().await;
        let today = self.today();
        let mut habits = self.load("reset_daily_completions").await?;

        let reset_count = habits
            .iter_mut()
            .map(|h| h.reset_for_day(today))
            .filter(|changed| *changed)
            .count();
        if reset_count == 0 {
            return Some(habits);
        }

        if !self.save("reset_daily_completions", &habits).await {
            return None;
        }
        info!(
            "Daily reset cleared {} habits for {}",
            reset_count,
            today.format(DATE_FORMAT)
        );

        drop(guard);
        self.publish(Box::new(DailyCompletionsReset {
            date: today,
            reset_count,
            occurred_at: Utc::now(),
        }))
        .await;
        Some(habits)
    }

    async fn load(&self, operation: &str) -> Option<Vec<Habit>> {
        match self.habit_repo.load_all().await {
            Ok(habits) => Some(habits),
            Err(e) => {
                error!("{}: failed to load habits: {}", operation, e.format_with_code());
                None
            }
        }
    }

    async fn save(&self, operation: &str, habits: &[Habit]) -> bool {
        match self.habit_repo.save_all(habits).await {
            Ok(()) => true,
            Err(e) => {
                error!("{}: failed to save habits: {}", operation, e.format_with_code());
                false
            }
        }
    }

    async fn publish(&self, event: Box<dyn DomainEvent>) {
        let name = event.event_type_name();
        if let Err(e) = self.event_bus.publish(event).await {
            warn!("Failed to publish {}: {}", name, e);
        }
    }
}
