use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::task::{InvalidTask, TaskStatus};

/// Creation payload for `POST /tasks`.
///
/// `description` is required; `status` defaults to `todo` when absent. A
/// status outside the three literals fails deserialization and never gets
/// this far. Unknown fields are dropped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewTask {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl NewTask {
    pub fn validate(&self) -> Result<(), InvalidTask> {
        if self.description.is_empty() {
            return Err(InvalidTask::EmptyDescription);
        }
        Ok(())
    }

    /// The status the created task starts in.
    pub fn status_or_default(&self) -> TaskStatus {
        self.status.unwrap_or(TaskStatus::Todo)
    }
}

/// Partial update payload for `PUT /tasks/{id}`.
///
/// Every field is optional; absent fields are left unchanged by the store.
/// `id` and `createdAt` are not part of the payload — clients sending them
/// have them silently dropped, the same way unknown fields are.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    pub fn validate(&self) -> Result<(), InvalidTask> {
        if let Some(description) = &self.description {
            if description.is_empty() {
                return Err(InvalidTask::EmptyDescription);
            }
        }
        Ok(())
    }

    /// A patch that only moves the task to `status`.
    pub fn status_only(status: TaskStatus) -> Self {
        Self {
            description: None,
            status: Some(status),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_task_rejects_empty_description() {
        let payload = NewTask {
            description: String::new(),
            status: None,
        };
        assert!(matches!(
            payload.validate(),
            Err(InvalidTask::EmptyDescription)
        ));
    }

    #[test]
    fn new_task_defaults_to_todo() {
        let payload: NewTask = serde_json::from_value(json!({
            "description": "write spec"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.status_or_default(), TaskStatus::Todo);
    }

    #[test]
    fn new_task_rejects_unknown_status_literal() {
        let result: Result<NewTask, _> = serde_json::from_value(json!({
            "description": "write spec",
            "status": "paused"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn patch_drops_id_and_created_at() {
        let patch: TaskPatch = serde_json::from_value(json!({
            "id": "forged",
            "createdAt": "2020-01-01T00:00:00Z",
            "status": "done"
        }))
        .unwrap();
        assert_eq!(patch.status, Some(TaskStatus::Done));
        assert!(patch.description.is_none());
    }

    #[test]
    fn patch_with_empty_description_is_invalid() {
        let patch = TaskPatch {
            description: Some(String::new()),
            status: None,
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(TaskPatch::default().validate().is_ok());
    }
}
