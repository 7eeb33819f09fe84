use thiserror::Error;
use uuid::Uuid;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{0}")]
    Conflict(String),

    /// The merged record would break an invariant the input alone could not show.
    #[error("{0}")]
    Invalid(String),
}

impl StorageError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Rejected input, raised by the `validate` methods on `Create*`/`Update*` inputs.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), Self> {
        if value.trim().is_empty() {
            return Err(Self::new(field, "must not be empty"));
        }
        Ok(())
    }

    pub(crate) fn require_optional_text(
        field: &'static str,
        value: Option<&str>,
    ) -> Result<(), Self> {
        match value {
            Some(v) => Self::require_text(field, v),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_entity() {
        let err = StorageError::not_found("Task", Uuid::new_v4());
        assert_eq!(err.to_string(), "Task not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_is_not_a_missing_record() {
        let err = StorageError::Invalid("endTime: must not precede startTime".into());
        assert_eq!(err.to_string(), "endTime: must not precede startTime");
        assert!(!err.is_not_found());
    }

    #[test]
    fn validation_message_names_the_field() {
        let err = ValidationError::new("title", "must not be empty");
        assert_eq!(err.to_string(), "title: must not be empty");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(ValidationError::require_text("title", "   ").is_err());
        assert!(ValidationError::require_text("title", "ok").is_ok());
        assert!(ValidationError::require_optional_text("name", None).is_ok());
        assert!(ValidationError::require_optional_text("name", Some("")).is_err());
    }
}
