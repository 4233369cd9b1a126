//! Task CRUD and transition endpoints.
//!
//! Each handler maps 1:1 onto a use-case function in [`crate::service`];
//! the only logic here is HTTP translation (payload rejection -> 400,
//! missing task -> 404).

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use tasktrack_types::{NewTask, Task, TaskPatch, TaskStatus};

use crate::error::ServerError;
use crate::service;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        create_task,
        list_tasks,
        list_tasks_by_status,
        update_task,
        delete_task,
        mark_in_progress,
        mark_done
    ),
    components(schemas(Task, TaskStatus, NewTask, TaskPatch, TaskReply, MessageReply))
)]
pub struct TasksApi;

/// Mutation responses carry a human-readable message plus the task.
#[derive(Serialize, ToSchema)]
pub struct TaskReply {
    pub message: String,
    pub task: Task,
}

/// Deletion responses carry only the message.
#[derive(Serialize, ToSchema)]
pub struct MessageReply {
    pub message: String,
}

pub fn router() -> Router<Arc<AppState>> {
    // Axum allows one parameter name per path shape, so the second segment
    // is registered as {id} even though the GET reads it as a status filter.
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(list_tasks_by_status)
                .put(update_task)
                .delete(delete_task),
        )
        .route("/tasks/{id}/in-progress", patch(mark_in_progress))
        .route("/tasks/{id}/done", patch(mark_done))
}

fn not_found(id: &str) -> ServerError {
    ServerError::NotFound(format!("task {id} not found"))
}

#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = NewTask,
    responses(
        (status = 201, description = "Task added", body = TaskReply),
        (status = 400, description = "Invalid input"),
        (status = 500, description = "Storage fault"),
    )
)]
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskReply>), ServerError> {
    let Json(payload) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let task = service::add_task(state.store.as_ref(), payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(TaskReply {
            message: "Task added successfully".to_owned(),
            task,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks", body = [Task]),
        (status = 500, description = "Storage fault"),
    )
)]
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Task>>, ServerError> {
    let tasks = service::list_tasks(state.store.as_ref()).await?;
    Ok(Json(tasks))
}

#[utoipa::path(
    get,
    path = "/tasks/{status}",
    tag = "tasks",
    params(
        ("status" = String, Path, description = "Status filter, used verbatim")
    ),
    responses(
        (status = 200, description = "Tasks with the given status, possibly empty", body = [Task]),
        (status = 500, description = "Storage fault"),
    )
)]
pub async fn list_tasks_by_status(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Task>>, ServerError> {
    let tasks = service::list_tasks_by_status(state.store.as_ref(), &status).await?;
    Ok(Json(tasks))
}

#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task id")),
    request_body = TaskPatch,
    responses(
        (status = 200, description = "Task updated", body = TaskReply),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Task not found"),
    )
)]
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<TaskReply>, ServerError> {
    let Json(patch) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let task = service::update_task(state.store.as_ref(), &id, patch)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(TaskReply {
        message: "Task updated successfully".to_owned(),
        task,
    }))
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task deleted", body = MessageReply),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Storage fault"),
    )
)]
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageReply>, ServerError> {
    let deleted = service::delete_task(state.store.as_ref(), &id).await?;
    if !deleted {
        return Err(not_found(&id));
    }
    Ok(Json(MessageReply {
        message: "Task deleted successfully".to_owned(),
    }))
}

#[utoipa::path(
    patch,
    path = "/tasks/{id}/in-progress",
    tag = "tasks",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task marked as in progress", body = TaskReply),
        (status = 404, description = "Task not found"),
    )
)]
pub async fn mark_in_progress(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TaskReply>, ServerError> {
    let task = service::mark_in_progress(state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(TaskReply {
        message: "Task marked as in progress".to_owned(),
        task,
    }))
}

#[utoipa::path(
    patch,
    path = "/tasks/{id}/done",
    tag = "tasks",
    params(("id" = String, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task marked as done", body = TaskReply),
        (status = 404, description = "Task not found"),
    )
)]
pub async fn mark_done(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TaskReply>, ServerError> {
    let task = service::mark_done(state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(TaskReply {
        message: "Task marked as done".to_owned(),
        task,
    }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
