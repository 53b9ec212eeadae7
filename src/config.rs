//! Client configuration.

use crate::error::Result;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.intacct.com/ia/xml/xmlgw.phtml";

/// Gateway settings shared by every request a client sends.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// XML gateway URL, used when the session does not name its own.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Web services sender id.
    #[serde(default)]
    pub sender_id: String,
    /// Web services sender password.
    #[serde(default)]
    pub sender_password: String,
    #[serde(default = "default_dtd_version")]
    pub dtd_version: String,
    /// Ask the gateway to reject requests whose control id it has seen before.
    #[serde(default)]
    pub unique_id: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_dtd_version() -> String {
    "2.1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            sender_id: String::new(),
            sender_password: String::new(),
            dtd_version: default_dtd_version(),
            unique_id: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from an optional `intacct.toml` in the working
    /// directory, overridden by `INTACCT_*` environment variables.
    pub fn load() -> Result<Self> {
        let config = ::config::Config::builder()
            .add_source(::config::File::with_name("intacct").required(false))
            .add_source(::config::Environment::with_prefix("INTACCT").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn with_sender(mut self, sender_id: impl Into<String>, password: impl Into<String>) -> Self {
        self.sender_id = sender_id.into();
        self.sender_password = password.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
