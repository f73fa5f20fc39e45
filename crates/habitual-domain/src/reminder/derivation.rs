use super::trigger::{Trigger, TriggerKind, TriggerPayload, TriggerSchedule};
use crate::habit::{Habit, HabitType, Priority};
use crate::settings::Settings;

/// Daily nudge for unfinished good habits (19:00)
pub const GOOD_HABIT_REMINDER_TIME: (u8, u8) = (19, 0);

/// Deterrent times for bad habits, spread over the day
pub const BAD_HABIT_REMINDER_TIMES: [(u8, u8); 10] = [
    (9, 0),
    (9, 30),
    (12, 0),
    (12, 30),
    (15, 0),
    (15, 30),
    (18, 0),
    (18, 30),
    (21, 0),
    (21, 30),
];

fn daily(hour: u8, minute: u8) -> TriggerSchedule {
    TriggerSchedule::Daily { hour, minute }
}

fn wants_priority_reminder(habit: &Habit) -> bool {
    matches!(
        (habit.habit_type(), habit.priority()),
        (HabitType::Good, Priority::High)
    )
}

/// Compute every trigger that should be installed for `habits` under `settings`.
///
/// Pure: equal inputs give equal output, in a stable order
/// (good, bad, priority, custom, then the incomplete-priority digest).
pub fn derive_triggers(habits: &[Habit], settings: &Settings) -> Vec<Trigger> {
    let mut triggers = Vec::new();
    let (good_hour, good_minute) = GOOD_HABIT_REMINDER_TIME;

    for habit in habits {
        if habit.habit_type() == HabitType::Good && !habit.is_completed() {
            triggers.push(Trigger {
                title: "Habit Reminder".to_string(),
                body: format!("Complete \"{}\" now to keep your streak!", habit.name()),
                payload: TriggerPayload::for_habit(TriggerKind::Good, habit.id()),
                when: daily(good_hour, good_minute),
            });
        }
    }

    for habit in habits.iter().filter(|h| h.is_bad()) {
        for (hour, minute) in BAD_HABIT_REMINDER_TIMES {
            triggers.push(Trigger {
                title: "Avoid Bad Habit".to_string(),
                body: format!(
                    "Stay strong! Avoid \"{}\" to maintain your progress.",
                    habit.name()
                ),
                payload: TriggerPayload::for_habit(TriggerKind::Bad, habit.id()),
                when: daily(hour, minute),
            });
        }
    }

    let priority_time = settings.high_priority_reminder_time;
    let priority_when = daily(priority_time.hour(), priority_time.minute());

    if settings.enable_high_priority_reminders {
        for habit in habits.iter().filter(|h| wants_priority_reminder(h)) {
            triggers.push(Trigger {
                title: "Priority Habit Alert!".to_string(),
                body: format!(
                    "Don't procrastinate! Time for \"{}\" - High priority habit.",
                    habit.name()
                ),
                payload: TriggerPayload::for_habit(TriggerKind::Priority, habit.id()),
                when: priority_when,
            });
        }
    }

    for habit in habits {
        if let Some(minutes) = habit.reminder_interval() {
            triggers.push(Trigger {
                title: "Custom Reminder".to_string(),
                body: format!("Time for \"{}\"!", habit.name()),
                payload: TriggerPayload::for_habit(TriggerKind::Custom, habit.id()),
                when: TriggerSchedule::Interval {
                    seconds: u64::from(minutes) * 60,
                },
            });
        }
    }

    if settings.enable_high_priority_reminders {
        let pending: Vec<&Habit> = habits
            .iter()
            .filter(|h| wants_priority_reminder(h) && !h.is_completed())
            .collect();

        if !pending.is_empty() {
            let names = pending
                .iter()
                .map(|h| h.name())
                .collect::<Vec<_>>()
                .join(", ");
            triggers.push(Trigger {
                title: format!("{} High Priority Habits Pending!", pending.len()),
                body: format!("Complete these important habits: {names}"),
                payload: TriggerPayload {
                    kind: TriggerKind::IncompletePriority,
                    habit_ids: pending.iter().map(|h| h.id().clone()).collect(),
                },
                when: priority_when,
            });
        }
    }

    triggers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::HabitDetails;
    use crate::shared::HabitId;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn habit(id: &str, details: HabitDetails) -> Habit {
        Habit::new(HabitId::from_string(id), details).unwrap()
    }

    fn completed(mut habit: Habit) -> Habit {
        habit.toggle_completion(today(), today());
        habit
    }

    fn count(triggers: &[Trigger], kind: TriggerKind) -> usize {
        triggers.iter().filter(|t| t.kind() == kind).count()
    }

    #[test]
    fn test_good_habit_reminder() {
        let triggers = derive_triggers(
            &[habit("1", HabitDetails::new("Read"))],
            &Settings::default(),
        );

        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].title, "Habit Reminder");
        assert_eq!(triggers[0].body, "Complete \"Read\" now to keep your streak!");
        assert_eq!(triggers[0].when, TriggerSchedule::Daily { hour: 19, minute: 0 });
    }

    #[test]
    fn test_bad_habit_gets_ten_deterrents_regardless_of_completion() {
        let smoking = completed(habit(
            "1",
            HabitDetails::new("Smoking")
                .with_type(HabitType::Bad)
                .with_priority(Priority::High),
        ));

        let triggers = derive_triggers(&[smoking], &Settings::default());

        assert_eq!(triggers.len(), 10);
        assert_eq!(count(&triggers, TriggerKind::Bad), 10);
        let times: HashSet<_> = triggers.iter().map(|t| t.when).collect();
        assert_eq!(times.len(), 10);
        assert!(times.contains(&TriggerSchedule::Daily { hour: 21, minute: 30 }));
    }

    #[test]
    fn test_custom_interval_in_seconds() {
        let stretch = completed(habit(
            "1",
            HabitDetails::new("Stretch").with_reminder_interval(45),
        ));

        let triggers = derive_triggers(&[stretch], &Settings::default());

        assert_eq!(triggers.len(), 1);
        assert_eq!(triggers[0].title, "Custom Reminder");
        assert_eq!(triggers[0].body, "Time for \"Stretch\"!");
        assert_eq!(triggers[0].when, TriggerSchedule::Interval { seconds: 2700 });
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let habits = vec![
            habit("1", HabitDetails::new("Read").with_priority(Priority::High)),
            habit("2", HabitDetails::new("Smoking").with_type(HabitType::Bad)),
            habit("3", HabitDetails::new("Walk").with_reminder_interval(30)),
        ];
        let settings = Settings::default();

        let first: HashSet<Trigger> = derive_triggers(&habits, &settings).into_iter().collect();
        let second: HashSet<Trigger> = derive_triggers(&habits, &settings).into_iter().collect();

        assert_eq!(first, second);
        assert_eq!(derive_triggers(&habits, &settings), derive_triggers(&habits, &settings));
    }

    #[test]
    fn test_completed_good_habit_has_no_daily_reminder() {
        let read = completed(habit("1", HabitDetails::new("Read")));
        let triggers = derive_triggers(&[read], &Settings::default());
        assert_eq!(count(&triggers, TriggerKind::Good), 0);
    }

    #[test]
    fn test_disabled_priority_reminders_suppress_priority_and_digest() {
        let settings = Settings {
            enable_high_priority_reminders: false,
            ..Settings::default()
        };
        let habits = vec![habit("1", HabitDetails::new("Read").with_priority(Priority::High))];

        let triggers = derive_triggers(&habits, &settings);

        assert_eq!(count(&triggers, TriggerKind::Priority), 0);
        assert_eq!(count(&triggers, TriggerKind::IncompletePriority), 0);
        assert_eq!(count(&triggers, TriggerKind::Good), 1);
    }

    #[test]
    fn test_bad_high_priority_habit_is_not_a_priority_reminder() {
        let habits = vec![habit(
            "1",
            HabitDetails::new("Smoking")
                .with_type(HabitType::Bad)
                .with_priority(Priority::High),
        )];

        let triggers = derive_triggers(&habits, &Settings::default());

        assert_eq!(count(&triggers, TriggerKind::Priority), 0);
        assert_eq!(count(&triggers, TriggerKind::IncompletePriority), 0);
    }

    #[test]
    fn test_mixed_completion_high_priority_habits() {
        let done = completed(habit(
            "1",
            HabitDetails::new("Drink water").with_priority(Priority::High),
        ));
        let pending = habit("2", HabitDetails::new("Exercise").with_priority(Priority::High));
        let settings = Settings {
            high_priority_reminder_time: "08:15".parse().unwrap(),
            ..Settings::default()
        };

        let triggers = derive_triggers(&[done, pending], &settings);

        let good: Vec<_> = triggers.iter().filter(|t| t.kind() == TriggerKind::Good).collect();
        assert_eq!(good.len(), 1);
        assert_eq!(good[0].payload.habit_ids, vec![HabitId::from_string("2")]);

        let priority: Vec<_> = triggers
            .iter()
            .filter(|t| t.kind() == TriggerKind::Priority)
            .collect();
        assert_eq!(priority.len(), 2);
        assert!(priority
            .iter()
            .all(|t| t.when == TriggerSchedule::Daily { hour: 8, minute: 15 }));

        let digest: Vec<_> = triggers
            .iter()
            .filter(|t| t.kind() == TriggerKind::IncompletePriority)
            .collect();
        assert_eq!(digest.len(), 1);
        assert_eq!(digest[0].title, "1 High Priority Habits Pending!");
        assert_eq!(digest[0].body, "Complete these important habits: Exercise");
        assert_eq!(digest[0].payload.count(), 1);
        assert_eq!(digest[0].when, TriggerSchedule::Daily { hour: 8, minute: 15 });

        assert_eq!(triggers.len(), 4);
    }

    #[test]
    fn test_no_habits_no_triggers() {
        assert!(derive_triggers(&[], &Settings::default()).is_empty());
    }
}
