use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Metadata;
use crate::ValidationError;

/// One sample of a KPI time series. Samples are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetric {
    pub id: Uuid,
    pub user_id: Uuid,
    pub metric_name: String,
    pub value: f64,
    pub period: String,
    pub source: String,
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKpiMetricInput {
    pub metric_name: String,
    pub value: f64,
    pub period: String,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub metadata: Metadata,
}

fn default_source() -> String {
    "manual".to_string()
}

impl CreateKpiMetricInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_text("metricName", &self.metric_name)?;
        ValidationError::require_text("period", &self.period)?;
        if !self.value.is_finite() {
            return Err(ValidationError::new("value", "must be a finite number"));
        }
        Ok(())
    }
}
