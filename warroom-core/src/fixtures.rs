//! Canned data standing in for external integrations.
//!
//! Nothing here talks to a real service. Anything built from these fixtures
//! is marked as such (`mock: true`, or a `source` metadata entry of `"fixture"`)
//! so callers can never mistake it for live data.

use chrono::{DateTime, Utc};

use crate::models::{
    ContactInfo, CreateLeadInput, LeadIntent, LeadSearchParams, MetaValue, Metadata,
    ServiceHealth, ServiceStatus,
};

pub const FIXTURE_SOURCE: &str = "fixture";

/// Points added to a lead's score by enrichment.
pub const ENRICHMENT_SCORE_BOOST: u8 = 15;

/// Technologies every enriched lead is reported to use.
pub const ENRICHMENT_TECHNOLOGIES: &[&str] = &["Salesforce", "HubSpot", "Slack"];

#[derive(Debug, Clone, Copy)]
pub struct SampleCompany {
    pub company_name: &'static str,
    pub domain: &'static str,
    pub industry: &'static str,
    pub employee_count: u32,
    pub lead_score: u8,
    pub intent: LeadIntent,
    pub technologies: &'static [&'static str],
}

pub static SAMPLE_COMPANIES: [SampleCompany; 3] = [
    SampleCompany {
        company_name: "TechFlow Solutions",
        domain: "techflow.io",
        industry: "Technology",
        employee_count: 250,
        lead_score: 85,
        intent: LeadIntent::High,
        technologies: &["React", "Node.js", "AWS"],
    },
    SampleCompany {
        company_name: "CloudScale Systems",
        domain: "cloudscale.com",
        industry: "technology",
        employee_count: 1200,
        lead_score: 72,
        intent: LeadIntent::Medium,
        technologies: &["Kubernetes", "Go", "GCP"],
    },
    SampleCompany {
        company_name: "MediCore Health",
        domain: "medicore.health",
        industry: "Healthcare",
        employee_count: 540,
        lead_score: 64,
        intent: LeadIntent::Low,
        technologies: &["Epic", "Azure", "Salesforce"],
    },
];

impl SampleCompany {
    pub fn matches(&self, params: &LeadSearchParams) -> bool {
        if let Some(industry) = &params.industry {
            if !self.industry.eq_ignore_ascii_case(industry.trim()) {
                return false;
            }
        }
        if let Some(intent) = params.intent {
            if self.intent != intent {
                return false;
            }
        }
        match params.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => {
                let needle = q.to_lowercase();
                [self.company_name, self.domain, self.industry]
                    .iter()
                    .chain(self.technologies.iter())
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            _ => true,
        }
    }

    pub fn to_input(&self) -> CreateLeadInput {
        let mut metadata = Metadata::new();
        metadata.insert("source".into(), MetaValue::from(FIXTURE_SOURCE));

        CreateLeadInput {
            company_name: self.company_name.to_string(),
            domain: Some(self.domain.to_string()),
            industry: self.industry.to_string(),
            employee_count: Some(self.employee_count),
            lead_score: self.lead_score,
            intent: self.intent,
            technologies: self.technologies.iter().map(|t| t.to_string()).collect(),
            metadata,
        }
    }
}

pub fn matching_companies(
    params: &LeadSearchParams,
) -> impl Iterator<Item = &'static SampleCompany> + '_ {
    SAMPLE_COMPANIES.iter().filter(move |c| c.matches(params))
}

/// Decision-maker details attached by enrichment.
pub fn enrichment_contact(company_name: &str, domain: Option<&str>) -> ContactInfo {
    let domain = domain
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}.com", slug(company_name)));

    ContactInfo {
        name: Some("Jordan Avery".to_string()),
        title: Some("VP of Operations".to_string()),
        email: Some(format!("jordan.avery@{}", domain)),
        phone: Some("+1-555-0142".to_string()),
        linkedin: Some(format!("https://linkedin.com/company/{}", slug(company_name))),
    }
}

fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn system_status(now: DateTime<Utc>) -> Vec<ServiceStatus> {
    let service = |name: &str, status, latency_ms, uptime_percent| ServiceStatus {
        name: name.to_string(),
        status,
        latency_ms,
        uptime_percent,
        last_checked: now,
        mock: true,
    };

    vec![
        service("OpenAI API", ServiceHealth::Operational, 142, 99.98),
        service("Stripe Billing", ServiceHealth::Operational, 88, 99.99),
        service("GoHighLevel CRM", ServiceHealth::Degraded, 410, 98.70),
        service("Twilio SMS", ServiceHealth::Operational, 120, 99.95),
    ]
}

pub fn supersal_completion_message(title: &str) -> String {
    format!(
        "SuperSal has completed \"{}\". Outstanding work, boss. Everything is wrapped up and ready for review.",
        title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_filter_is_case_insensitive() {
        let params = LeadSearchParams {
            industry: Some("TECHNOLOGY".into()),
            ..Default::default()
        };
        let names: Vec<_> = matching_companies(&params).map(|c| c.company_name).collect();
        assert_eq!(names, vec!["TechFlow Solutions", "CloudScale Systems"]);
    }

    #[test]
    fn query_matches_technologies() {
        let params = LeadSearchParams {
            query: Some("kubernetes".into()),
            ..Default::default()
        };
        let names: Vec<_> = matching_companies(&params).map(|c| c.company_name).collect();
        assert_eq!(names, vec!["CloudScale Systems"]);
    }

    #[test]
    fn empty_params_match_every_company() {
        assert_eq!(matching_companies(&LeadSearchParams::default()).count(), 3);
    }

    #[test]
    fn enrichment_contact_derives_domain_when_missing() {
        let info = enrichment_contact("Acme Widgets", None);
        assert_eq!(info.email.as_deref(), Some("jordan.avery@acme-widgets.com"));
    }

    #[test]
    fn system_status_is_four_mock_services() {
        let status = system_status(Utc::now());
        assert_eq!(status.len(), 4);
        assert!(status.iter().all(|s| s.mock));
    }
}
