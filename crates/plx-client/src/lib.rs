//! # plx-client
//!
//! Organization-scoped REST client for the PlatifyX backend.
//!
//! Every backend call goes through [`ApiClient::api_fetch`], which derives
//! the URL from configuration and attaches the bearer token and organization
//! header read from the credential store at call time. Endpoint groups live
//! in their own modules:
//! - CI/CD: builds, pipelines, releases, stats
//! - Secrets: AWS Secrets Manager and Vault KV
//! - RBAC and SSO settings
//! - FinOps cost reporting
//! - Infrastructure templates and service playbooks
//! - Documentation generation
//!
//! The client never retries, caches or deduplicates.

pub mod ci;
pub mod envelope;
pub mod finops;
pub mod playbook;
pub mod rbac;
pub mod secrets;
pub mod sequence;
pub mod settings;
pub mod techdocs;
pub mod templates;

mod error;
mod http;
mod url;

use std::sync::Arc;
use std::time::Duration;

use plx_auth::{CredentialSource, Credentials};
use plx_config::ApiConfig;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::ApiError;
pub use http::{check_response, read_json};
pub use sequence::{RequestSequence, Ticket};
pub use url::{ApiBase, Query, segment};

/// Header carrying the active organization id.
pub const ORGANIZATION_HEADER: &str = "x-organization-uuid";

// ── Request ────────────────────────────────────────────────────────

/// One backend call, before credentials are attached.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Relative to `{base_url}/api/{version}/`, may include a query string.
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub headers: HeaderMap,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a caller header. Names are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidPath`] if the name or value is not a valid
    /// header.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, ApiError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::InvalidPath(format!("header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::InvalidPath(format!("header value for '{name}': {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }
}

/// Merge caller headers with credentials.
///
/// `Content-Type: application/json` is added only when a body is present and
/// the caller has not set a content type of its own.
///
/// # Errors
///
/// Returns [`ApiError::Unauthenticated`] when no token is stored.
pub fn prepare_headers(
    credentials: &Credentials,
    body_present: bool,
    mut headers: HeaderMap,
) -> Result<HeaderMap, ApiError> {
    let token = credentials
        .token
        .as_deref()
        .ok_or(ApiError::Unauthenticated)?;
    let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| ApiError::Unauthenticated)?;
    headers.insert(AUTHORIZATION, bearer);

    match credentials.org_id.as_deref().map(HeaderValue::from_str) {
        Some(Ok(org)) => {
            headers.insert(HeaderName::from_static(ORGANIZATION_HEADER), org);
        }
        Some(Err(_)) => tracing::warn!("stored organization id is not a valid header value"),
        None => tracing::debug!("no organization selected; sending request unscoped"),
    }

    if body_present && !headers.contains_key(CONTENT_TYPE) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    Ok(headers)
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the PlatifyX backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: ApiBase,
    credentials: Arc<dyn CredentialSource>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the section is invalid or the
    /// underlying `reqwest::Client` fails to build.
    pub fn new(
        config: &ApiConfig,
        credentials: Arc<dyn CredentialSource>,
    ) -> Result<Self, ApiError> {
        config
            .validate()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self {
            http,
            base: ApiBase::from_config(config),
            credentials,
        })
    }

    #[must_use]
    pub const fn base(&self) -> &ApiBase {
        &self.base
    }

    #[must_use]
    pub fn build_api_url(&self, path: &str) -> String {
        self.base.build_api_url(path)
    }

    /// Send one request with credentials attached and return the raw
    /// response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthenticated`] without sending anything if no
    /// token is stored, and [`ApiError::Network`] if no response arrives.
    pub async fn api_fetch(&self, request: ApiRequest) -> Result<reqwest::Response, ApiError> {
        let credentials = self.credentials.credentials();
        let headers = prepare_headers(&credentials, request.body.is_some(), request.headers)?;
        let url = self.base.build_api_url(&request.path);
        tracing::debug!(method = %request.method, %url, "api request");

        let mut builder = self.http.request(request.method, &url).headers(headers);
        if let Some(body) = request.body {
            let bytes = serde_json::to_vec(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
            builder = builder.body(bytes);
        }
        builder.send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "request failed before a response arrived");
            ApiError::Network(e.to_string())
        })
    }

    /// [`Self::api_fetch`] followed by the status check.
    ///
    /// # Errors
    ///
    /// See [`Self::api_fetch`] and [`check_response`].
    pub async fn send(&self, request: ApiRequest) -> Result<reqwest::Response, ApiError> {
        let method = request.method.clone();
        let path = request.path.clone();
        let resp = self.api_fetch(request).await?;
        check_response(resp).await.inspect_err(|e| {
            tracing::warn!(%method, %path, status = ?e.status(), "backend rejected request");
        })
    }

    /// `GET path` parsed as `T`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        read_json(self.send(ApiRequest::get(path)).await?).await
    }

    /// `GET path` as a list, accepting a bare array or an object wrapping it
    /// under `key`, `data` or `items`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
    ) -> Result<Vec<T>, ApiError> {
        let payload: serde_json::Value = self.get_json(path).await?;
        envelope::extract_list(payload, key)
    }

    /// Send a JSON body with `method` and parse the reply as `T`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Parse(e.to_string()))?;
        let resp = self.send(ApiRequest::new(method, path).json(body)).await?;
        read_json(resp).await
    }

    /// Send a JSON body with `method`, ignoring the reply body.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] except [`ApiError::Parse`] for the reply.
    pub async fn send_unit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        let mut request = ApiRequest::new(method, path);
        if let Some(body) = body {
            request = request
                .json(serde_json::to_value(body).map_err(|e| ApiError::Parse(e.to_string()))?);
        }
        self.send(request).await.map(drop)
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] except [`ApiError::Parse`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_unit::<()>(Method::DELETE, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn creds(token: Option<&str>, org: Option<&str>) -> Credentials {
        Credentials {
            token: token.map(str::to_string),
            org_id: org.map(str::to_string),
        }
    }

    #[test]
    fn headers_carry_bearer_and_org() {
        let headers =
            prepare_headers(&creds(Some("tok"), Some("org-1")), false, HeaderMap::new()).unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer tok");
        assert_eq!(headers[ORGANIZATION_HEADER], "org-1");
        assert!(!headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn content_type_added_once_for_body() {
        let headers = prepare_headers(&creds(Some("tok"), None), true, HeaderMap::new()).unwrap();
        assert_eq!(headers.get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(!headers.contains_key(ORGANIZATION_HEADER));
    }

    #[test]
    fn caller_content_type_is_respected_case_insensitively() {
        let request = ApiRequest::get("x")
            .header("CONTENT-TYPE", "application/merge-patch+json")
            .unwrap();
        let headers = prepare_headers(&creds(Some("tok"), None), true, request.headers).unwrap();
        let values: Vec<_> = headers.get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values, vec!["application/merge-patch+json"]);
    }

    #[test]
    fn missing_token_is_unauthenticated() {
        let err = prepare_headers(&creds(None, Some("org")), false, HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ApiConfig {
            base_url: "ftp://nope".into(),
            ..Default::default()
        };
        let err = ApiClient::new(&config, Arc::new(plx_auth::StaticCredentials::default()))
            .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
