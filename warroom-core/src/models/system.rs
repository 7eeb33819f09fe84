use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub name: String,
    pub status: ServiceHealth,
    pub latency_ms: u32,
    pub uptime_percent: f64,
    pub last_checked: DateTime<Utc>,
    /// Always true: nothing is actually probed.
    pub mock: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceHealth {
    Operational,
    Degraded,
    Down,
}

