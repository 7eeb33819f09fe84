use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use warroom_core::audit::{AuditReport, AuditRequest, FunctionalAuthority};
use warroom_core::models::*;

use super::deleted;
use crate::api::{ApiContext, ApiError, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<SupersalTask>>, ApiError> {
    let tasks = state
        .storage
        .get_supersal_tasks(state.user_id)
        .context("Fetch SuperSal tasks")?;
    Ok(Json(tasks))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateSupersalTaskInput>, JsonRejection>,
) -> Result<(StatusCode, Json<SupersalTask>), ApiError> {
    const ACTION: &str = "Create SuperSal task";
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let task = state
        .storage
        .create_supersal_task(state.user_id, input)
        .context(ACTION)?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateSupersalTaskInput>, JsonRejection>,
) -> Result<Json<SupersalTask>, ApiError> {
    const ACTION: &str = "Update SuperSal task";
    let Path(id) = path.context(ACTION)?;
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let task = state
        .storage
        .update_supersal_task(id, input)
        .context(ACTION)?;
    Ok(Json(task))
}

pub async fn complete(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SupersalTask>, ApiError> {
    const ACTION: &str = "Complete SuperSal task";
    let Path(id) = path.context(ACTION)?;
    let task = state.storage.complete_supersal_task(id).context(ACTION)?;
    Ok(Json(task))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    const ACTION: &str = "Delete SuperSal task";
    let Path(id) = path.context(ACTION)?;
    let removed = state.storage.delete_supersal_task(id).context(ACTION)?;
    deleted(removed, ACTION, "SuperSal task")
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditBody {
    pub system_name: Option<String>,
}

/// Runs the Functional Authority checklist against the server's own
/// integration configuration.
pub async fn audit(
    State(state): State<AppState>,
    body: Result<Json<AuditBody>, JsonRejection>,
) -> Result<Json<AuditReport>, ApiError> {
    let Json(body) = body.context("Audit")?;

    let mut request = AuditRequest {
        configured_integrations: state.integrations.clone(),
        ..Default::default()
    };
    if let Some(name) = body.system_name.filter(|n| !n.trim().is_empty()) {
        request.system_name = name;
    }

    Ok(Json(FunctionalAuthority::generate(&request)))
}
