//! Runtime configuration resolved from CLI arguments and the environment.

use std::net::SocketAddr;

use warroom_core::audit::INTEGRATIONS;
use warroom_core::models::{CreateUserInput, MetaValue, Metadata};

/// Environment variable holding each integration's credential.
const CREDENTIAL_VARS: &[(&str, &str)] = &[
    ("openai", "OPENAI_API_KEY"),
    ("stripe", "STRIPE_SECRET_KEY"),
    ("ghl", "GHL_API_KEY"),
    ("azure", "AZURE_COGNITIVE_KEY"),
    ("twilio", "TWILIO_AUTH_TOKEN"),
    ("microsoft", "MS_GRAPH_TOKEN"),
];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub demo_username: String,
    pub demo_email: Option<String>,
    /// Keys of integrations whose credential variable is set and non-empty.
    pub integrations: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            demo_username: "demo".to_string(),
            demo_email: Some("demo@warroom.local".to_string()),
            integrations: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }

    /// The user every request acts as. Authentication is not implemented.
    pub fn demo_user(&self) -> CreateUserInput {
        let mut metadata = Metadata::new();
        metadata.insert("role".into(), MetaValue::from("demo"));

        CreateUserInput {
            username: self.demo_username.clone(),
            email: self.demo_email.clone(),
            biometric_enabled: false,
            metadata,
        }
    }

    pub fn with_env_integrations(mut self) -> Self {
        self.integrations = detect_integrations(|var| std::env::var(var).ok());
        self
    }

    /// Logs one warning per integration that will fall back to fixtures.
    pub fn warn_missing_integrations(&self) {
        for (key, name) in INTEGRATIONS {
            if !self.integrations.iter().any(|i| i == key) {
                let var = CREDENTIAL_VARS
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| *v)
                    .unwrap_or("credential");
                tracing::warn!("{} not set; {} responses use fixtures", var, name);
            }
        }
    }
}

fn detect_integrations(lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
    CREDENTIAL_VARS
        .iter()
        .filter(|(_, var)| lookup(var).is_some_and(|v| !v.trim().is_empty()))
        .map(|(key, _)| key.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_only_non_empty_credentials() {
        let found = detect_integrations(|var| match var {
            "OPENAI_API_KEY" => Some("sk-test".to_string()),
            "STRIPE_SECRET_KEY" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(found, vec!["openai".to_string()]);
    }

    #[test]
    fn every_integration_has_a_credential_var() {
        for (key, _) in INTEGRATIONS {
            assert!(CREDENTIAL_VARS.iter().any(|(k, _)| k == key), "{}", key);
        }
    }

    #[test]
    fn bind_addr_rejects_garbage_hosts() {
        let config = ServerConfig {
            host: "not a host".into(),
            ..Default::default()
        };
        assert!(config.bind_addr().is_err());
        assert_eq!(
            ServerConfig::default().bind_addr().unwrap().to_string(),
            "127.0.0.1:5000"
        );
    }
}
