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

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Workflow>>, ApiError> {
    let workflows = state
        .storage
        .get_workflows(state.user_id)
        .context("Fetch workflows")?;
    Ok(Json(workflows))
}

pub async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Workflow>, ApiError> {
    const ACTION: &str = "Fetch workflow";
    let Path(id) = path.context(ACTION)?;
    state
        .storage
        .get_workflow(id)
        .context(ACTION)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ACTION, "Workflow"))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateWorkflowInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Workflow>), ApiError> {
    const ACTION: &str = "Create workflow";
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let workflow = state
        .storage
        .create_workflow(state.user_id, input)
        .context(ACTION)?;
    Ok((StatusCode::CREATED, Json(workflow)))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateWorkflowInput>, JsonRejection>,
) -> Result<Json<Workflow>, ApiError> {
    const ACTION: &str = "Update workflow";
    let Path(id) = path.context(ACTION)?;
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let workflow = state.storage.update_workflow(id, input).context(ACTION)?;
    Ok(Json(workflow))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    const ACTION: &str = "Delete workflow";
    let Path(id) = path.context(ACTION)?;
    let removed = state.storage.delete_workflow(id).context(ACTION)?;
    deleted(removed, ACTION, "Workflow")
}
