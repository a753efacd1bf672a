//! Task API endpoints.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult, Message};
use crate::auth::{permissions, Identity};
use crate::errors::AppError;
use crate::models::{CreateTaskRequest, TaskRecord};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TaskQuery {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TaskList {
    pub tasks: Vec<TaskRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreated {
    pub message: String,
    pub task_id: i64,
}

/// GET /api/tasks - List tasks by status (default pending).
pub async fn get_tasks(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<TaskQuery>,
) -> ApiResult<TaskList> {
    state
        .oracle
        .require(identity.user_id, permissions::VIEW_ROOMS)?;

    let status = query.status.as_deref().unwrap_or("pending");
    let tasks = state.repo.list_tasks(status).await?;

    success(TaskList { tasks })
}

/// POST /api/tasks - Create a task.
pub async fn create_task(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<TaskCreated> {
    state
        .oracle
        .require(identity.user_id, permissions::ASSIGN_ROOMS)?;

    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let task_id = state.repo.create_task(&request, identity.user_id).await?;

    success(TaskCreated {
        message: "Task created successfully".to_string(),
        task_id,
    })
}

/// POST /api/tasks/:id/complete - Mark a task completed.
pub async fn complete_task(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
) -> ApiResult<Message> {
    state
        .oracle
        .require(identity.user_id, permissions::COMPLETE_TASKS)?;

    let completed = state.repo.complete_task(id, identity.user_id).await?;
    if !completed {
        return Err(AppError::NotFound(format!("Task {} not found", id)));
    }

    success(Message::new("Task completed"))
}
