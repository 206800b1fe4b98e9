//! Runtime configuration read from the process environment.
//!
//! Variables (all optional):
//! - `HOST`, `PORT`: bind address, `127.0.0.1:8080` by default.
//! - `RESEND_API_KEY`: email provider credential. When unset or empty, contact
//!   messages are written to the log instead of being emailed.
//! - `RESEND_ENDPOINT`: provider URL, for pointing at a sandbox.
//! - `CONTACT_FROM`, `CONTACT_TO`: fixed sender and recipient of relayed messages.
//!
//! A `.env` file in the working directory is loaded first when present.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    resend_api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub resend_endpoint: String,
    #[serde(default = "default_from")]
    pub contact_from: String,
    #[serde(default = "default_to")]
    pub contact_to: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_endpoint() -> String {
    "https://api.resend.com/emails".to_string()
}

fn default_from() -> String {
    "Portfolio Contact <onboarding@resend.dev>".to_string()
}

fn default_to() -> String {
    "vandanbsheth9@gmail.com".to_string()
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// The provider credential, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.resend_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::Delivery;

    fn load(vars: &[(&str, &str)]) -> Result<RelayConfig, ConfigError> {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert(key.to_string(), value.to_string());
        }
        RelayConfig::from_environment(Environment::default().source(Some(map)))
    }

    #[test]
    fn defaults_without_environment() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bind_addr(), ("127.0.0.1", 8080));
        assert_eq!(config.api_key(), None);
        assert_eq!(config.resend_endpoint, "https://api.resend.com/emails");
        assert_eq!(config.contact_from, "Portfolio Contact <onboarding@resend.dev>");
    }

    #[test]
    fn reads_credential_and_overrides() {
        let config = load(&[
            ("RESEND_API_KEY", "re_123"),
            ("PORT", "3000"),
            ("CONTACT_TO", "me@example.com"),
        ])
        .unwrap();
        assert_eq!(config.api_key(), Some("re_123"));
        assert_eq!(config.port, 3000);
        assert_eq!(config.contact_to, "me@example.com");
    }

    #[test]
    fn blank_credential_counts_as_absent() {
        let config = load(&[("RESEND_API_KEY", "  ")]).unwrap();
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn credential_selects_delivery_mode() {
        let logged = load(&[]).unwrap();
        assert!(matches!(Delivery::from_config(&logged), Delivery::Log));

        let sent = load(&[("RESEND_API_KEY", "re_123")]).unwrap();
        assert!(matches!(Delivery::from_config(&sent), Delivery::Provider(_)));
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(load(&[("PORT", "not-a-port")]).is_err());
    }
}
