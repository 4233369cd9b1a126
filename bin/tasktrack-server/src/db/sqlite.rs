//! SQLite implementation of [`TaskStore`].
//!
//! Uses [`sqlx`] with the `sqlite` feature. Migrations are run automatically
//! on connect; `sqlx::migrate!("./migrations")` resolves the path at compile
//! time relative to the crate root, so the directory is embedded into the
//! binary. The database file location is determined at runtime by the
//! `TASKTRACK_DATABASE_URL` environment variable.
//!
//! The `sqlx::query` (runtime-verified) form is used deliberately so that no
//! `DATABASE_URL` environment variable is needed at compile time.

use std::str::FromStr;

use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tasktrack_types::{TaskPatch, TaskStatus};
use uuid::Uuid;

use super::{TaskRow, TaskStore};

/// Columns of the `tasks` table in select order, timestamps as RFC 3339 text.
type SqlRow = (String, String, String, String, String);

const SELECT_COLUMNS: &str = "id, description, status, created_at, updated_at";

/// SQLite-backed task store.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the SQLite database at `url` and run pending
    /// migrations.
    ///
    /// `url` should be a sqlx-compatible SQLite URL, e.g.
    /// `"sqlite://tasktrack.db"`.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Close the underlying pool. Called once after graceful shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Single-connection in-memory database for tests. One connection is
    /// required because every new `:memory:` connection starts empty.
    #[cfg(test)]
    pub(crate) async fn connect_in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

fn decode_row((id, description, status, created_at, updated_at): SqlRow) -> TaskRow {
    TaskRow {
        id,
        description,
        status: status.parse().unwrap_or_else(|e| {
            tracing::warn!(raw = %status, error = %e, "unreadable task status in store; treating as todo");
            TaskStatus::Todo
        }),
        created_at: created_at.parse().unwrap_or_else(|e: chrono::ParseError| {
            tracing::warn!(raw = %created_at, error = %e, "failed to parse task created_at; using now");
            Utc::now()
        }),
        updated_at: updated_at.parse().unwrap_or_else(|e: chrono::ParseError| {
            tracing::warn!(raw = %updated_at, error = %e, "failed to parse task updated_at; using now");
            Utc::now()
        }),
    }
}

impl TaskStore for SqliteStore {
    async fn create_task(
        &self,
        description: &str,
        status: TaskStatus,
    ) -> Result<TaskRow, sqlx::Error> {
        let now = Utc::now();
        let row = TaskRow {
            id: Uuid::new_v4().to_string(),
            description: description.to_owned(),
            status,
            created_at: now,
            updated_at: now,
        };
        let created_at = row.created_at.to_rfc3339();
        let updated_at = row.updated_at.to_rfc3339();
        sqlx::query(
            "INSERT INTO tasks (id, description, status, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&row.id)
        .bind(&row.description)
        .bind(row.status.as_str())
        .bind(&created_at)
        .bind(&updated_at)
        .execute(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_tasks(&self) -> Result<Vec<TaskRow>, sqlx::Error> {
        // No ORDER BY: callers get rowid order in practice and must not rely
        // on it.
        let rows: Vec<SqlRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM tasks"))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(decode_row).collect())
    }

    async fn list_tasks_by_status(&self, status: &str) -> Result<Vec<TaskRow>, sqlx::Error> {
        let rows: Vec<SqlRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM tasks WHERE status = ?1"))
                .bind(status)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(decode_row).collect())
    }

    async fn get_task(&self, id: &str) -> Result<Option<TaskRow>, sqlx::Error> {
        let row: Option<SqlRow> =
            sqlx::query_as(&format!("SELECT {SELECT_COLUMNS} FROM tasks WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(decode_row))
    }

    async fn update_task(
        &self,
        id: &str,
        patch: &TaskPatch,
    ) -> Result<Option<TaskRow>, sqlx::Error> {
        let updated_at = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "UPDATE tasks SET description = COALESCE(?1, description), \
             status = COALESCE(?2, status), updated_at = ?3 WHERE id = ?4",
        )
        .bind(patch.description.as_deref())
        .bind(patch.status.map(|s| s.as_str()))
        .bind(&updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_task(id).await
    }

    async fn delete_task(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn create_assigns_id_and_equal_timestamps() {
        let store = SqliteStore::connect_in_memory().await.unwrap();
        let row = store
            .create_task("buy milk", TaskStatus::Todo)
            .await
            .unwrap();
        assert!(!row.id.is_empty());
        assert_eq!(row.created_at, row.updated_at);

        let stored = store.get_task(&row.id).await.unwrap().unwrap();
        assert_eq!(stored.description, "buy milk");
        assert_eq!(stored.status, TaskStatus::Todo);
    }

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let store = SqliteStore::connect_in_memory().await.unwrap();
        let row = store
            .create_task("write spec", TaskStatus::Todo)
            .await
            .unwrap();

        let patch = TaskPatch::status_only(TaskStatus::Done);
        let updated = store.update_task(&row.id, &patch).await.unwrap().unwrap();
        assert_eq!(updated.status, TaskStatus::Done);
        assert_eq!(updated.description, "write spec");
        assert_eq!(updated.created_at, row.created_at);
    }

    #[tokio::test]
    async fn missing_id_is_an_explicit_outcome_not_an_error() {
        let store = SqliteStore::connect_in_memory().await.unwrap();
        assert!(store.get_task("no-such-id").await.unwrap().is_none());
        assert!(!store.delete_task("no-such-id").await.unwrap());
        let patch = TaskPatch::status_only(TaskStatus::Done);
        assert!(
            store
                .update_task("no-such-id", &patch)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn status_filter_matches_raw_text() {
        let store = SqliteStore::connect_in_memory().await.unwrap();
        store
            .create_task("one", TaskStatus::InProgress)
            .await
            .unwrap();
        store.create_task("two", TaskStatus::Done).await.unwrap();

        let in_progress = store.list_tasks_by_status("in-progress").await.unwrap();
        assert_eq!(in_progress.len(), 1);
        assert_eq!(in_progress[0].description, "one");

        assert!(store.list_tasks_by_status("bogus").await.unwrap().is_empty());
    }
}
