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

/// Pinned notes first, newest first within each group.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<StickyNote>>, ApiError> {
    let notes = state
        .storage
        .get_sticky_notes(state.user_id)
        .context("Fetch sticky notes")?;
    Ok(Json(notes))
}

pub async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<StickyNote>, ApiError> {
    const ACTION: &str = "Fetch sticky note";
    let Path(id) = path.context(ACTION)?;
    state
        .storage
        .get_sticky_note(id)
        .context(ACTION)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ACTION, "Sticky note"))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateStickyNoteInput>, JsonRejection>,
) -> Result<(StatusCode, Json<StickyNote>), ApiError> {
    const ACTION: &str = "Create sticky note";
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let note = state
        .storage
        .create_sticky_note(state.user_id, input)
        .context(ACTION)?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateStickyNoteInput>, JsonRejection>,
) -> Result<Json<StickyNote>, ApiError> {
    const ACTION: &str = "Update sticky note";
    let Path(id) = path.context(ACTION)?;
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let note = state.storage.update_sticky_note(id, input).context(ACTION)?;
    Ok(Json(note))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    const ACTION: &str = "Delete sticky note";
    let Path(id) = path.context(ACTION)?;
    let removed = state.storage.delete_sticky_note(id).context(ACTION)?;
    deleted(removed, ACTION, "Sticky note")
}
