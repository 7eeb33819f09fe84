use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Metadata, Priority, TaskStatus};
use crate::ValidationError;

/// An executive task handed to the SuperSal assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupersalTask {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub instructions: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub completed: bool,
    pub ai_generated: bool,
    pub supersal_response: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSupersalTaskInput {
    pub title: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub ai_generated: bool,
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl CreateSupersalTaskInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_text("title", &self.title)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupersalTaskInput {
    pub title: Option<String>,
    pub instructions: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub completed: Option<bool>,
    pub supersal_response: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub metadata: Option<Metadata>,
}

impl UpdateSupersalTaskInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_optional_text("title", self.title.as_deref())
    }
}
