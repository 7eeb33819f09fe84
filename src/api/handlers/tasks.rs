use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use warroom_core::models::*;

use super::deleted;
use crate::api::{ApiContext, ApiError, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.storage.get_tasks(state.user_id).context("Fetch tasks")?;
    Ok(Json(tasks))
}

pub async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    const ACTION: &str = "Fetch task";
    let Path(id) = path.context(ACTION)?;
    state
        .storage
        .get_task(id)
        .context(ACTION)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ACTION, "Task"))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    const ACTION: &str = "Create task";
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let task = state
        .storage
        .create_task(state.user_id, input)
        .context(ACTION)?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateTaskInput>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    const ACTION: &str = "Update task";
    let Path(id) = path.context(ACTION)?;
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let task = state.storage.update_task(id, input).context(ACTION)?;
    Ok(Json(task))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    const ACTION: &str = "Delete task";
    let Path(id) = path.context(ACTION)?;
    let removed = state.storage.delete_task(id).context(ACTION)?;
    deleted(removed, ACTION, "Task")
}
