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

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state
        .storage
        .get_contacts(state.user_id)
        .context("Fetch contacts")?;
    Ok(Json(contacts))
}

pub async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Contact>, ApiError> {
    const ACTION: &str = "Fetch contact";
    let Path(id) = path.context(ACTION)?;
    state
        .storage
        .get_contact(id)
        .context(ACTION)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ACTION, "Contact"))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateContactInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    const ACTION: &str = "Create contact";
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let contact = state
        .storage
        .create_contact(state.user_id, input)
        .context(ACTION)?;
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateContactInput>, JsonRejection>,
) -> Result<Json<Contact>, ApiError> {
    const ACTION: &str = "Update contact";
    let Path(id) = path.context(ACTION)?;
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let contact = state.storage.update_contact(id, input).context(ACTION)?;
    Ok(Json(contact))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    const ACTION: &str = "Delete contact";
    let Path(id) = path.context(ACTION)?;
    let removed = state.storage.delete_contact(id).context(ACTION)?;
    deleted(removed, ACTION, "Contact")
}
