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

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let events = state
        .storage
        .get_calendar_events(state.user_id)
        .context("Fetch calendar events")?;
    Ok(Json(events))
}

pub async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CalendarEvent>, ApiError> {
    const ACTION: &str = "Fetch calendar event";
    let Path(id) = path.context(ACTION)?;
    state
        .storage
        .get_calendar_event(id)
        .context(ACTION)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ACTION, "Calendar event"))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateCalendarEventInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CalendarEvent>), ApiError> {
    const ACTION: &str = "Create calendar event";
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let event = state
        .storage
        .create_calendar_event(state.user_id, input)
        .context(ACTION)?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateCalendarEventInput>, JsonRejection>,
) -> Result<Json<CalendarEvent>, ApiError> {
    const ACTION: &str = "Update calendar event";
    let Path(id) = path.context(ACTION)?;
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let event = state
        .storage
        .update_calendar_event(id, input)
        .context(ACTION)?;
    Ok(Json(event))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    const ACTION: &str = "Delete calendar event";
    let Path(id) = path.context(ACTION)?;
    let removed = state.storage.delete_calendar_event(id).context(ACTION)?;
    deleted(removed, ACTION, "Calendar event")
}
