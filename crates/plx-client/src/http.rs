//! Shared HTTP response helpers.
//!
//! Centralizes the non-success status check so endpoint modules stay focused
//! on request construction and response mapping.

use crate::error::ApiError;

const MESSAGE_FIELDS: [&str; 3] = ["error", "message", "details"];

/// Check an HTTP response status.
///
/// Returns the response unchanged on success. A non-success status becomes
/// [`ApiError::Http`] carrying the first string found in the body's JSON
/// `error`, `message` or `details` field, or a generic message naming the
/// status.
///
/// # Errors
///
/// Returns [`ApiError::Http`] for any non-2xx status.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Http {
        status: status.as_u16(),
        message: error_message(status.as_u16(), &body),
    })
}

/// Extract a display message from an error body.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            MESSAGE_FIELDS.iter().find_map(|field| match &value[*field] {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                serde_json::Value::Object(inner) => inner
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string),
                _ => None,
            })
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

/// Read a response body as JSON.
///
/// The body is read as text first so that a transport failure and a malformed
/// payload surface as different errors.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the body cannot be read, and
/// [`ApiError::Parse`] if it is not valid JSON for `T`.
pub async fn read_json<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ApiError> {
    let text = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}
