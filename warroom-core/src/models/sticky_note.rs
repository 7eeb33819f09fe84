use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Metadata, Priority};
use crate::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickyNote {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: StickyNoteType,
    pub priority: Priority,
    pub pinned: bool,
    pub color: Option<String>,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StickyNoteType {
    #[default]
    Note,
    Reminder,
    Idea,
    Todo,
}

impl StickyNoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::Reminder => "reminder",
            Self::Idea => "idea",
            Self::Todo => "todo",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStickyNoteInput {
    pub content: String,
    #[serde(default, rename = "type")]
    pub kind: StickyNoteType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub pinned: bool,
    pub color: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl CreateStickyNoteInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_text("content", &self.content)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStickyNoteInput {
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<StickyNoteType>,
    pub priority: Option<Priority>,
    pub pinned: Option<bool>,
    pub color: Option<String>,
    pub metadata: Option<Metadata>,
}

impl UpdateStickyNoteInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_optional_text("content", self.content.as_deref())
    }
}
