use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Metadata;
use crate::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    pub attendees: Vec<String>,
    /// Identifier of the mirrored Microsoft Calendar event, if any.
    pub external_id: Option<String>,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarEventInput {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub location: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub external_id: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl CreateCalendarEventInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_text("title", &self.title)?;
        if self.end_time < self.start_time {
            return Err(ValidationError::new("endTime", "must not precede startTime"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCalendarEventInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub attendees: Option<Vec<String>>,
    pub metadata: Option<Metadata>,
}

impl UpdateCalendarEventInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_optional_text("title", self.title.as_deref())?;
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end < start {
                return Err(ValidationError::new("endTime", "must not precede startTime"));
            }
        }
        Ok(())
    }
}
