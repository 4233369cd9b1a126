use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Why a payload was rejected before reaching the store.
#[derive(Debug, Error)]
pub enum InvalidTask {
    #[error("description cannot be empty")]
    EmptyDescription,

    #[error("unknown status: {0} (expected todo, in-progress, or done)")]
    UnknownStatus(String),
}

/// Lifecycle stage of a task.
///
/// The model is flat: any status may move to any other status via an update.
/// There are no transition guards and no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad() keeps width specifiers working in formatted output.
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = InvalidTask;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(InvalidTask::UnknownStatus(other.to_owned())),
        }
    }
}

/// The persisted task entity.
///
/// `id` is assigned by the persistence layer on creation and never changes.
/// `created_at` is set once; `updated_at` is refreshed on every successful
/// mutation, so `updated_at >= created_at` always holds. Wire shape uses
/// camelCase keys and ISO-8601 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_serializes_to_kebab_case() {
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            serde_json::json!("in-progress")
        );
    }

    #[test]
    fn status_parses_all_three_literals() {
        assert_eq!("todo".parse::<TaskStatus>().unwrap(), TaskStatus::Todo);
        assert_eq!(
            "in-progress".parse::<TaskStatus>().unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!("done".parse::<TaskStatus>().unwrap(), TaskStatus::Done);
    }

    #[test]
    fn status_rejects_unknown_literal() {
        let err = "bogus".parse::<TaskStatus>().unwrap_err();
        assert!(matches!(err, InvalidTask::UnknownStatus(s) if s == "bogus"));
    }

    #[test]
    fn task_uses_camel_case_keys_on_the_wire() {
        let now = Utc::now();
        let task = Task {
            id: "t-1".to_owned(),
            description: "buy milk".to_owned(),
            status: TaskStatus::Todo,
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert_eq!(value["status"], "todo");
    }
}
