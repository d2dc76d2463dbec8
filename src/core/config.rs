//! Configuration management

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Production API endpoint
pub const API_URL: &str = "https://api.gengo.com/v2/";

/// Sandbox API endpoint
pub const SANDBOX_API_URL: &str = "http://api.sandbox.gengo.com/v2/";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Configuration for a client instance
///
/// The credential pair is held in memory only and is immutable for the
/// lifetime of the client built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub public_key: String,
    pub private_key: String,
    pub sandbox: bool,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            private_key: String::new(),
            sandbox: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Create a configuration from a credential pair
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
            ..Default::default()
        }
    }

    /// Point the client at the sandbox environment
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let public_key = std::env::var("GENGO_PUBLIC_KEY")
            .map_err(|_| anyhow::anyhow!("GENGO_PUBLIC_KEY environment variable is required"))?;

        let private_key = std::env::var("GENGO_PRIVATE_KEY")
            .map_err(|_| anyhow::anyhow!("GENGO_PRIVATE_KEY environment variable is required"))?;

        let sandbox = std::env::var("GENGO_USE_SANDBOX")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let timeout_secs = std::env::var("GENGO_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()?;

        Ok(Self {
            public_key,
            private_key,
            sandbox,
            timeout_secs,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.public_key.is_empty() {
            return Err(anyhow::anyhow!("Public API key is required"));
        }

        if self.private_key.is_empty() {
            return Err(anyhow::anyhow!("Private API key is required"));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow::anyhow!("timeout_secs must be greater than 0"));
        }

        if self.sandbox {
            warn!("Client configured against the Gengo sandbox environment");
        }

        Ok(())
    }

    /// Base URL selected by the sandbox flag
    pub fn base_url(&self) -> &'static str {
        if self.sandbox {
            SANDBOX_API_URL
        } else {
            API_URL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = ClientConfig::new("pub", "priv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_missing_key() {
        let config = ClientConfig {
            public_key: "".to_string(),
            private_key: "priv".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = ClientConfig::new("pub", "priv").with_timeout_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_url_selection() {
        let production = ClientConfig::new("pub", "priv");
        assert_eq!(production.base_url(), API_URL);

        let sandbox = ClientConfig::new("pub", "priv").with_sandbox(true);
        assert_eq!(sandbox.base_url(), SANDBOX_API_URL);
    }

    #[test]
    fn test_default_timeout() {
        let config = ClientConfig::new("pub", "priv");
        assert_eq!(config.timeout_secs, 300);
    }
}
