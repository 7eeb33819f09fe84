use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use warroom_core::models::*;

use crate::api::{ApiContext, ApiError, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct MemoryQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<MemoryQuery>,
) -> Result<Json<Vec<AiMemory>>, ApiError> {
    let memories = state
        .storage
        .get_ai_memories(state.user_id, query.kind.as_deref())
        .context("Fetch AI memory")?;
    Ok(Json(memories))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateAiMemoryInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AiMemory>), ApiError> {
    const ACTION: &str = "Store AI memory";
    let Json(input) = body.context(ACTION)?;
    input.validate().context(ACTION)?;

    let memory = state
        .storage
        .create_ai_memory(state.user_id, input)
        .context(ACTION)?;
    Ok((StatusCode::CREATED, Json(memory)))
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<AiMemory>>, ApiError> {
    let memories = state
        .storage
        .search_ai_memories(state.user_id, &query.q)
        .context("Search AI memory")?;
    Ok(Json(memories))
}
