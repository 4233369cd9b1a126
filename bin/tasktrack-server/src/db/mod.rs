//! Persistence gateway for tasks.
//!
//! [`TaskStore`] is the boundary translating entity operations into store
//! operations. The default implementation is [`sqlite::SqliteStore`]; to
//! swap to another database, implement [`TaskStore`] for a new type and
//! change the concrete type in [`crate::state::AppState`].
//!
//! All trait methods use `impl Future` in their signatures (stable since
//! Rust 1.75) so no extra `async-trait` crate is required. "No such task"
//! is an explicit `Option` / `bool` outcome, distinct from a storage fault
//! (`sqlx::Error`).

pub mod sqlite;

use std::future::Future;

use chrono::{DateTime, Utc};
use tasktrack_types::{Task, TaskPatch, TaskStatus};

/// One row of the `tasks` table.
#[derive(Debug, Clone)]
pub struct TaskRow {
    pub id: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            description: row.description,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Trait for persisting tasks.
pub trait TaskStore: Send + Sync + 'static {
    /// Persist a new task. Assigns a fresh unique id and sets
    /// `created_at = updated_at = now`.
    fn create_task(
        &self,
        description: &str,
        status: TaskStatus,
    ) -> impl Future<Output = Result<TaskRow, sqlx::Error>> + Send;

    /// All tasks. Row order is unspecified.
    fn list_tasks(&self) -> impl Future<Output = Result<Vec<TaskRow>, sqlx::Error>> + Send;

    /// Tasks whose status column equals `status` exactly. A value outside
    /// the three literals matches nothing and yields an empty vec, never an
    /// error.
    fn list_tasks_by_status(
        &self,
        status: &str,
    ) -> impl Future<Output = Result<Vec<TaskRow>, sqlx::Error>> + Send;

    /// A single task, or `None` when the id resolves to nothing.
    fn get_task(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<TaskRow>, sqlx::Error>> + Send;

    /// Apply the fields present in `patch`, leaving the rest unchanged, and
    /// refresh `updated_at`. Returns the updated row, or `None` when the id
    /// resolves to nothing.
    fn update_task(
        &self,
        id: &str,
        patch: &TaskPatch,
    ) -> impl Future<Output = Result<Option<TaskRow>, sqlx::Error>> + Send;

    /// Delete by id. Returns `false` when the id resolved to nothing.
    fn delete_task(&self, id: &str) -> impl Future<Output = Result<bool, sqlx::Error>> + Send;
}
