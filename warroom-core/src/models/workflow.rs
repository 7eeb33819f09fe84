use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Metadata, OpaqueJson};
use crate::ValidationError;

/// A visual node graph. The definition is stored opaquely and never executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub definition: OpaqueJson,
    pub status: WorkflowStatus,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Draft,
    Active,
    Paused,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflowInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub definition: OpaqueJson,
    #[serde(default)]
    pub status: WorkflowStatus,
    #[serde(default)]
    pub metadata: Metadata,
}

impl CreateWorkflowInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkflowInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub definition: Option<OpaqueJson>,
    pub status: Option<WorkflowStatus>,
    pub metadata: Option<Metadata>,
}

impl UpdateWorkflowInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_optional_text("name", self.name.as_deref())
    }
}
