use axum::{extract::State, Json};
use serde::Serialize;
use warroom_core::models::{ServiceStatus, User};

use crate::api::{ApiContext, ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The fixed demo user every request acts as.
pub async fn current_user(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    const ACTION: &str = "Fetch user";
    state
        .storage
        .get_user(state.user_id)
        .context(ACTION)?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(ACTION, "User"))
}

pub async fn status(State(state): State<AppState>) -> Result<Json<Vec<ServiceStatus>>, ApiError> {
    let status = state
        .storage
        .get_system_status()
        .context("System status")?;
    Ok(Json(status))
}
