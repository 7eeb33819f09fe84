use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Metadata;
use crate::ValidationError;

pub const MAX_LEAD_SCORE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadIntelligence {
    pub id: Uuid,
    pub user_id: Uuid,
    /// The search campaign that produced this row, if it came from a search.
    pub campaign_id: Option<Uuid>,
    pub company_name: String,
    pub domain: Option<String>,
    pub industry: String,
    pub employee_count: Option<u32>,
    pub lead_score: u8,
    pub intent: LeadIntent,
    pub technologies: Vec<String>,
    pub contact_info: Option<ContactInfo>,
    pub enriched_at: Option<DateTime<Utc>>,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LeadIntent {
    Low,
    #[default]
    Medium,
    High,
}

impl LeadIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadInput {
    pub company_name: String,
    pub domain: Option<String>,
    pub industry: String,
    pub employee_count: Option<u32>,
    #[serde(default = "default_lead_score")]
    pub lead_score: u8,
    #[serde(default)]
    pub intent: LeadIntent,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

fn default_lead_score() -> u8 {
    50
}

impl CreateLeadInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_text("companyName", &self.company_name)?;
        ValidationError::require_text("industry", &self.industry)?;
        if self.lead_score > MAX_LEAD_SCORE {
            return Err(ValidationError::new("leadScore", "must be between 0 and 100"));
        }
        Ok(())
    }
}

/// Filters for a lead search. Absent filters match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSearchParams {
    pub query: Option<String>,
    pub industry: Option<String>,
    pub intent: Option<LeadIntent>,
}

impl LeadSearchParams {
    /// Human readable description recorded on the campaign.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(q) = self.query.as_deref().filter(|q| !q.trim().is_empty()) {
            parts.push(format!("query={}", q.trim()));
        }
        if let Some(industry) = &self.industry {
            parts.push(format!("industry={}", industry));
        }
        if let Some(intent) = self.intent {
            parts.push(format!("intent={}", intent.as_str()));
        }
        if parts.is_empty() {
            "all".to_string()
        } else {
            parts.join(" ")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCampaign {
    pub id: Uuid,
    pub user_id: Uuid,
    pub query: String,
    pub industry: Option<String>,
    pub intent: Option<LeadIntent>,
    pub results_count: usize,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSearchCampaignInput {
    pub query: String,
    pub industry: Option<String>,
    pub intent: Option<LeadIntent>,
    #[serde(default)]
    pub results_count: usize,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSearchResult {
    pub campaign: SearchCampaign,
    pub leads: Vec<LeadIntelligence>,
}
