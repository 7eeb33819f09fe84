pub mod calendar;
pub mod chat;
pub mod contacts;
pub mod kpi;
pub mod leads;
pub mod memory;
pub mod sticky_notes;
pub mod supersal;
pub mod system;
pub mod tasks;
pub mod workflows;

use axum::http::StatusCode;

use super::ApiError;

/// 204 when something was removed, 404 otherwise.
fn deleted(removed: bool, action: &'static str, entity: &str) -> Result<StatusCode, ApiError> {
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(action, entity))
    }
}
