//! Client configuration: credentials, environment, HTTP options.

use std::time::Duration;

use crate::endpoints::{PRODUCTION_URL, SANDBOX_URL};

/// Gateway environment the client talks to, selected once at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Live gateway.
    #[default]
    Production,
    /// Test gateway.
    Sandbox,
}

impl Environment {
    /// Returns the base URL of this environment, without a trailing slash.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Sandbox => SANDBOX_URL,
        }
    }
}

/// Configuration for a [`Przelewy24`](crate::Przelewy24) client.
///
/// Carries the merchant credentials: the merchant id, the point-of-sale id
/// (defaulting to the merchant id when unset), the API key used for HTTP
/// basic authentication, and the CRC key used only inside signatures and
/// never transmitted.
pub struct Config {
    /// Merchant identifier.
    pub merchant_id: u32,

    /// Point-of-sale identifier; defaults to `merchant_id` when `None`.
    pub pos_id: Option<u32>,

    /// API key, sent as the basic-auth password on every request.
    pub api_key: String,

    /// CRC key, the shared signing secret.
    pub crc_key: String,

    /// Target gateway environment.
    pub environment: Environment,

    /// Base URL override; replaces the environment's URL when set.
    pub base_url: Option<String>,

    /// HTTP request timeout.
    pub timeout: Duration,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// created with the configured timeout.
    pub http_client: Option<reqwest::Client>,
}

impl Config {
    /// Creates a production configuration from the merchant credentials.
    #[must_use]
    pub fn new(merchant_id: u32, api_key: impl Into<String>, crc_key: impl Into<String>) -> Self {
        Self {
            merchant_id,
            pos_id: None,
            api_key: api_key.into(),
            crc_key: crc_key.into(),
            environment: Environment::Production,
            base_url: None,
            timeout: Duration::from_secs(30),
            http_client: None,
        }
    }

    /// Sets a point-of-sale id distinct from the merchant id.
    #[must_use]
    pub fn with_pos_id(mut self, pos_id: u32) -> Self {
        self.pos_id = Some(pos_id);
        self
    }

    /// Sets the target environment.
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the gateway base URL; a trailing slash is stripped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("merchant_id", &self.merchant_id)
            .field("pos_id", &self.pos_id)
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_http_client", &self.http_client.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_base_urls() {
        assert_eq!(
            Environment::Production.base_url(),
            "https://secure.przelewy24.pl"
        );
        assert_eq!(Environment::Sandbox.base_url(), "https://sandbox.przelewy24.pl");
    }

    #[test]
    fn debug_redacts_credentials() {
        let config = Config::new(1, "secret-api-key", "secret-crc");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-api-key"));
        assert!(!rendered.contains("secret-crc"));
    }
}
