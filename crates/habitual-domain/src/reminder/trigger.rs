use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::HabitId;

/// When a trigger recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TriggerSchedule {
    /// Every day at a local time of day
    Daily { hour: u8, minute: u8 },
    /// Every `seconds` seconds
    Interval { seconds: u64 },
}

impl fmt::Display for TriggerSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerSchedule::Daily { hour, minute } => write!(f, "daily at {hour:02}:{minute:02}"),
            TriggerSchedule::Interval { seconds } => write!(f, "every {seconds}s"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    Good,
    Bad,
    Priority,
    IncompletePriority,
    Custom,
}

/// Identifies what produced a trigger
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerPayload {
    #[serde(rename = "type")]
    pub kind: TriggerKind,
    pub habit_ids: Vec<HabitId>,
}

impl TriggerPayload {
    pub fn for_habit(kind: TriggerKind, habit_id: &HabitId) -> Self {
        Self {
            kind,
            habit_ids: vec![habit_id.clone()],
        }
    }

    pub fn count(&self) -> usize {
        self.habit_ids.len()
    }
}

/// One notification to install
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Trigger {
    pub title: String,
    pub body: String,
    pub payload: TriggerPayload,
    pub when: TriggerSchedule,
}

impl Trigger {
    pub fn kind(&self) -> TriggerKind {
        self.payload.kind
    }
}
