//! Organization settings: single sign-on.

use plx_core::entities::SsoSettings;
use plx_core::enums::SsoProvider;
use reqwest::Method;

use crate::{ApiClient, ApiError};

#[derive(serde::Serialize)]
struct Enabled {
    enabled: bool,
}

impl ApiClient {
    /// Create or replace the configuration of one SSO provider.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the settings.
    pub async fn configure_sso(&self, settings: &SsoSettings) -> Result<(), ApiError> {
        self.send_unit(Method::POST, "settings/sso", Some(settings))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the backend rejects the change.
    pub async fn set_sso_enabled(&self, provider: SsoProvider, enabled: bool) -> Result<(), ApiError> {
        let path = format!("settings/sso/{}/enabled", provider.as_str());
        self.send_unit(Method::PUT, &path, Some(&Enabled { enabled }))
            .await
    }
}
