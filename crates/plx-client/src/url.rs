//! Endpoint URL construction.
//!
//! Every request URL is derived from the configured base URL and API version;
//! nothing in the client hardcodes a host.

use plx_config::ApiConfig;

use crate::error::ApiError;

/// `{base_url}/api/{version}` prefix shared by all endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    base_url: String,
    version: String,
}

impl ApiBase {
    #[must_use]
    pub fn new(base_url: &str, version: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            version: version.trim().trim_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, &config.version)
    }

    /// `{base_url}/api/{version}/{path}`. Any query string in `path` is kept
    /// verbatim.
    ///
    /// ```
    /// use plx_client::ApiBase;
    ///
    /// let base = ApiBase::new("https://api.x.com", "v1");
    /// assert_eq!(
    ///     base.build_api_url("ci/builds?limit=50"),
    ///     "https://api.x.com/api/v1/ci/builds?limit=50"
    /// );
    /// ```
    #[must_use]
    pub fn build_api_url(&self, path: &str) -> String {
        format!(
            "{}/api/{}/{}",
            self.base_url,
            self.version,
            path.trim_start_matches('/')
        )
    }
}

/// Percent-encode one path segment (a secret name, a build id).
///
/// # Errors
///
/// Returns [`ApiError::InvalidPath`] for an empty segment, which would
/// otherwise address the parent collection.
pub fn segment(value: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::InvalidPath("empty path segment".into()));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// Builds `path?k=v&...`, skipping absent values.
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    #[must_use]
    pub fn push_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    #[must_use]
    pub fn apply(self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let query = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn build_api_url_matches_documented_example() {
        let base = ApiBase::new("https://api.x.com", "v1");
        assert_eq!(
            base.build_api_url("ci/builds?limit=50"),
            "https://api.x.com/api/v1/ci/builds?limit=50"
        );
    }

    #[test]
    fn slashes_are_normalized() {
        let base = ApiBase::new("https://api.x.com/", "/v2/");
        assert_eq!(
            base.build_api_url("/finops/stats"),
            "https://api.x.com/api/v2/finops/stats"
        );
    }

    #[test]
    fn query_verbatim_including_encoded_chars() {
        let base = ApiBase::new("http://localhost:8060", "v1");
        assert_eq!(
            base.build_api_url("vault/kv/read?path=apps%2Fpayments"),
            "http://localhost:8060/api/v1/vault/kv/read?path=apps%2Fpayments"
        );
    }

    #[test]
    fn segment_encodes_and_rejects_empty() {
        assert_eq!(segment("prod/payments db").unwrap(), "prod%2Fpayments%20db");
        assert!(matches!(segment("  "), Err(ApiError::InvalidPath(_))));
    }

    #[test]
    fn query_skips_absent_values() {
        let path = Query::new()
            .push("limit", 50)
            .push_opt("status", None::<&str>)
            .push_opt("branch", Some("feature/x"))
            .apply("ci/builds");
        assert_eq!(path, "ci/builds?limit=50&branch=feature%2Fx");
        assert_eq!(Query::new().apply("ci/stats"), "ci/stats");
    }
}
