use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use warroom_core::{StorageError, ValidationError};

/// An API failure, rendered as `{ "message": "<action> error: <detail>" }`.
#[derive(Debug)]
pub struct ApiError {
    action: &'static str,
    kind: ApiErrorKind,
}

#[derive(Debug)]
pub enum ApiErrorKind {
    BadRequest(String),
    NotFound(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    pub fn new(action: &'static str, kind: ApiErrorKind) -> Self {
        Self { action, kind }
    }

    pub fn not_found(action: &'static str, entity: &str) -> Self {
        Self::new(action, ApiErrorKind::NotFound(format!("{} not found", entity)))
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind {
            ApiErrorKind::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> String {
        let detail = match &self.kind {
            ApiErrorKind::BadRequest(d) | ApiErrorKind::NotFound(d) => d,
        };
        format!("{} error: {}", self.action, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();
        tracing::debug!(%status, "{}", message);
        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<StorageError> for ApiErrorKind {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { .. } => Self::NotFound(err.to_string()),
            StorageError::Conflict(msg) | StorageError::Invalid(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<ValidationError> for ApiErrorKind {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiErrorKind {
    fn from(err: JsonRejection) -> Self {
        Self::BadRequest(err.body_text())
    }
}

impl From<PathRejection> for ApiErrorKind {
    fn from(err: PathRejection) -> Self {
        Self::BadRequest(err.body_text())
    }
}

/// Attaches the failing action to any error that maps onto an [`ApiErrorKind`].
pub trait ApiContext<T> {
    fn context(self, action: &'static str) -> Result<T, ApiError>;
}

impl<T, E: Into<ApiErrorKind>> ApiContext<T> for Result<T, E> {
    fn context(self, action: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(action, e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn storage_not_found_maps_to_404() {
        let err = ApiError::new(
            "Update task",
            StorageError::not_found("Task", Uuid::new_v4()).into(),
        );
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Update task error: Task not found");
    }

    #[test]
    fn validation_maps_to_400() {
        let err: Result<(), _> = Err(ValidationError::new("title", "must not be empty"));
        let err = err.context("Create task").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Create task error: title: must not be empty");
    }

    #[test]
    fn conflict_maps_to_400() {
        let err = ApiError::new("Create user", StorageError::Conflict("taken".into()).into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_merge_maps_to_400() {
        let err = ApiError::new(
            "Update calendar event",
            StorageError::Invalid("endTime: must not precede startTime".into()).into(),
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message(),
            "Update calendar event error: endTime: must not precede startTime"
        );
    }
}
