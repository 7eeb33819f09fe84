use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Metadata;
use crate::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub biometric_enabled: bool,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub username: String,
    pub email: Option<String>,
    #[serde(default)]
    pub biometric_enabled: bool,
    #[serde(default)]
    pub metadata: Metadata,
}

impl CreateUserInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_text("username", &self.username)?;
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(ValidationError::new("email", "must be an email address"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StripeInfo {
    pub customer_id: String,
    pub subscription_id: Option<String>,
}
