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

use crate::api::{ApiContext, ApiError, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ChatSession>>, ApiError> {
    let sessions = state
        .storage
        .get_chat_sessions(state.user_id)
        .context("Fetch chat sessions")?;
    Ok(Json(sessions))
}

pub async fn get_one(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ChatSession>, ApiError> {
    const ACTION: &str = "Fetch chat session";
    let Path(id) = path.context(ACTION)?;
    state
        .storage
        .get_chat_session(id)
        .context(ACTION)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ACTION, "Chat session"))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateChatSessionInput>, JsonRejection>,
) -> Result<(StatusCode, Json<ChatSession>), ApiError> {
    const ACTION: &str = "Create chat session";
    let Json(input) = body.context(ACTION)?;

    let session = state
        .storage
        .create_chat_session(state.user_id, input)
        .context(ACTION)?;
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn append_message(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<AppendChatMessageInput>, JsonRejection>,
) -> Result<Json<ChatSession>, ApiError> {
    const ACTION: &str = "Chat";
    let Path(id) = path.context(ACTION)?;
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let session = state
        .storage
        .append_chat_message(id, input)
        .context(ACTION)?;
    Ok(Json(session))
}
