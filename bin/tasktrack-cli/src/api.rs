//! Blocking HTTP client for the tasktrack REST API.
//!
//! One method per endpoint; every mutation returns the server's reply so the
//! caller can echo its message. Timeouts and retries are left to the reqwest
//! defaults.

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use tasktrack_types::{NewTask, Task, TaskPatch};

use crate::error::ClientError;

/// Mutation reply: a human-readable message plus the task.
#[derive(Debug, Deserialize)]
pub struct TaskReply {
    pub message: String,
    pub task: Task,
}

/// Deletion reply: message only.
#[derive(Debug, Deserialize)]
pub struct MessageReply {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            http: Client::builder().build()?,
            base: base.into().trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Turn a response into `T`, or into [`ClientError::Api`] carrying the
    /// server's `{"error": …}` message.
    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json()?);
        }
        let message = response
            .json::<ApiError>()
            .map(|e| e.error)
            .unwrap_or_else(|_| status.to_string());
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        Self::decode(self.http.get(self.url("/tasks")).send()?)
    }

    /// The filter value goes into the path verbatim; an unknown value yields
    /// an empty list on the server side.
    pub fn list_tasks_by_status(&self, status: &str) -> Result<Vec<Task>, ClientError> {
        Self::decode(self.http.get(self.url(&format!("/tasks/{status}"))).send()?)
    }

    pub fn add_task(&self, payload: &NewTask) -> Result<TaskReply, ClientError> {
        Self::decode(self.http.post(self.url("/tasks")).json(payload).send()?)
    }

    pub fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<TaskReply, ClientError> {
        Self::decode(
            self.http
                .put(self.url(&format!("/tasks/{id}")))
                .json(patch)
                .send()?,
        )
    }

    pub fn delete_task(&self, id: &str) -> Result<MessageReply, ClientError> {
        Self::decode(self.http.delete(self.url(&format!("/tasks/{id}"))).send()?)
    }

    pub fn mark_in_progress(&self, id: &str) -> Result<TaskReply, ClientError> {
        Self::decode(
            self.http
                .patch(self.url(&format!("/tasks/{id}/in-progress")))
                .send()?,
        )
    }

    pub fn mark_done(&self, id: &str) -> Result<TaskReply, ClientError> {
        Self::decode(
            self.http
                .patch(self.url(&format!("/tasks/{id}/done")))
                .send()?,
        )
    }
}
