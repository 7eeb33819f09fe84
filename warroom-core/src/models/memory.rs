use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Metadata;
use crate::ValidationError;

/// A free-text note remembered for the assistant.
///
/// `embedding` is carried for wire compatibility only; nothing searches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiMemory {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub embedding: Option<Vec<f32>>,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAiMemoryInput {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl CreateAiMemoryInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_text("type", &self.kind)?;
        ValidationError::require_text("content", &self.content)
    }
}
