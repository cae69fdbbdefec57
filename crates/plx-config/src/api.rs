//! Backend API endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    "http://localhost:8060".to_string()
}

fn default_version() -> String {
    "v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("platifyx/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://portal.example.com`. Every request goes
    /// to `{base_url}/api/{version}/...`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version path segment.
    #[serde(default = "default_version")]
    pub version: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_version(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Check if the API config has the minimum required fields.
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.version.trim().is_empty()
    }

    /// Reject values that would produce unusable request URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the base URL or version is
    /// empty and [`ConfigError::InvalidValue`] when the base URL has no
    /// `http(s)://` scheme or the version contains a `/`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "api".into(),
            });
        }
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{base}' must start with http:// or https://"),
            });
        }
        if self.version.contains('/') {
            return Err(ConfigError::InvalidValue {
                field: "api.version".into(),
                reason: format!("'{}' must be a single path segment", self.version),
            });
        }
        Ok(())
    }
}
