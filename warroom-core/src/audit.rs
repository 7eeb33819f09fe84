//! The Functional Authority audit report.
//!
//! This is a canned checklist, not a verifier: outcomes are fixed per check,
//! except integration checks, which degrade to [`AuditOutcome::Warn`] when the
//! integration is not listed as configured.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    Pass,
    Warn,
    Fail,
}

impl AuditOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    #[serde(default = "default_system_name")]
    pub system_name: String,
    /// Integrations with credentials present, e.g. `"openai"`, `"stripe"`.
    #[serde(default)]
    pub configured_integrations: Vec<String>,
}

fn default_system_name() -> String {
    "War Room".to_string()
}

impl Default for AuditRequest {
    fn default() -> Self {
        Self {
            system_name: default_system_name(),
            configured_integrations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFinding {
    pub category: String,
    pub check: String,
    pub outcome: AuditOutcome,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub id: Uuid,
    pub system_name: String,
    pub generated_at: DateTime<Utc>,
    pub findings: Vec<AuditFinding>,
    pub summary: AuditSummary,
}

struct Check {
    category: &'static str,
    name: &'static str,
    outcome: AuditOutcome,
    detail: &'static str,
}

const STATIC_CHECKS: &[Check] = &[
    Check {
        category: "routing",
        name: "REST endpoints respond with JSON",
        outcome: AuditOutcome::Pass,
        detail: "All /api routes return JSON bodies, including errors.",
    },
    Check {
        category: "routing",
        name: "Request bodies are validated",
        outcome: AuditOutcome::Pass,
        detail: "Create and update payloads are checked before reaching storage.",
    },
    Check {
        category: "storage",
        name: "Records are user scoped",
        outcome: AuditOutcome::Pass,
        detail: "Listings only return records owned by the requesting user.",
    },
    Check {
        category: "storage",
        name: "Data survives restarts",
        outcome: AuditOutcome::Warn,
        detail: "Storage is memory resident; everything is lost on restart.",
    },
    Check {
        category: "security",
        name: "Authentication",
        outcome: AuditOutcome::Warn,
        detail: "Requests run as a fixed demo user; no login is enforced.",
    },
    Check {
        category: "ui",
        name: "Dashboard widgets load",
        outcome: AuditOutcome::Pass,
        detail: "Chat, sticky notes and lead search widgets have backing endpoints.",
    },
];

/// (integration key, display name)
pub const INTEGRATIONS: &[(&str, &str)] = &[
    ("openai", "OpenAI chat"),
    ("stripe", "Stripe billing"),
    ("ghl", "GoHighLevel CRM"),
    ("azure", "Azure Cognitive Services"),
    ("twilio", "Twilio SMS"),
    ("microsoft", "Microsoft Calendar"),
];

pub struct FunctionalAuthority;

impl FunctionalAuthority {
    pub fn generate(request: &AuditRequest) -> AuditReport {
        let mut findings: Vec<AuditFinding> = STATIC_CHECKS
            .iter()
            .map(|c| AuditFinding {
                category: c.category.to_string(),
                check: c.name.to_string(),
                outcome: c.outcome,
                detail: c.detail.to_string(),
            })
            .collect();

        for (key, name) in INTEGRATIONS {
            let configured = request
                .configured_integrations
                .iter()
                .any(|i| i.eq_ignore_ascii_case(key));
            let (outcome, detail) = if configured {
                (AuditOutcome::Pass, format!("{} credentials present.", name))
            } else {
                (
                    AuditOutcome::Warn,
                    format!("{} is not configured; responses fall back to fixtures.", name),
                )
            };
            tracing::debug!(integration = *key, outcome = outcome.as_str(), "checked integration");
            findings.push(AuditFinding {
                category: "integrations".to_string(),
                check: format!("{} connectivity", name),
                outcome,
                detail,
            });
        }

        let summary = summarize(&findings);
        tracing::debug!(
            system = %request.system_name,
            score = summary.score,
            "generated functional authority report"
        );

        AuditReport {
            id: Uuid::new_v4(),
            system_name: request.system_name.clone(),
            generated_at: Utc::now(),
            findings,
            summary,
        }
    }
}

fn summarize(findings: &[AuditFinding]) -> AuditSummary {
    let count = |outcome| findings.iter().filter(|f| f.outcome == outcome).count();
    let passed = count(AuditOutcome::Pass);
    let warnings = count(AuditOutcome::Warn);
    let failed = count(AuditOutcome::Fail);

    let score = if findings.is_empty() {
        0
    } else {
        let weighted = passed as f64 + 0.5 * warnings as f64;
        (100.0 * weighted / findings.len() as f64).round() as u8
    };

    AuditSummary {
        passed,
        warnings,
        failed,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_integrations_warn() {
        let report = FunctionalAuthority::generate(&AuditRequest::default());
        let integration_warnings = report
            .findings
            .iter()
            .filter(|f| f.category == "integrations" && f.outcome == AuditOutcome::Warn)
            .count();
        assert_eq!(integration_warnings, INTEGRATIONS.len());
    }

    #[test]
    fn configured_integrations_pass() {
        let report = FunctionalAuthority::generate(&AuditRequest {
            system_name: "HQ".into(),
            configured_integrations: vec!["OpenAI".into(), "stripe".into()],
        });
        let passing: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.category == "integrations" && f.outcome == AuditOutcome::Pass)
            .map(|f| f.check.as_str())
            .collect();
        assert_eq!(passing, vec!["OpenAI chat connectivity", "Stripe billing connectivity"]);
        assert_eq!(report.system_name, "HQ");
    }

    #[test]
    fn score_weights_warnings_at_half() {
        // 4 static passes + 2 static warns + 6 integration warns
        let report = FunctionalAuthority::generate(&AuditRequest::default());
        assert_eq!(report.summary.passed, 4);
        assert_eq!(report.summary.warnings, 8);
        assert_eq!(report.summary.failed, 0);
        assert_eq!(report.summary.score, 67);
    }
}
