//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the PlatifyX backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("network error: {0}")]
    Network(String),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Http {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message extracted from the error body, or a generic fallback.
        message: String,
    },

    /// A success response whose body is not the expected JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// No token is stored, so the request was not sent.
    #[error("not authenticated")]
    Unauthenticated,

    /// The path or an identifier cannot be turned into a request URL.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// The client could not be constructed from configuration.
    #[error("client configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Message suitable for showing to a user as-is.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Network(detail) => {
                format!("Could not reach the PlatifyX backend ({detail})")
            }
            Self::Http { message, .. } => message.clone(),
            Self::Parse(detail) => format!("Unexpected response from the backend: {detail}"),
            Self::Unauthenticated => "Not authenticated. Run `plx auth login` first.".to_string(),
            Self::InvalidPath(path) => format!("Invalid request path: {path}"),
            Self::Config(detail) => format!("Client misconfigured: {detail}"),
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::Http {
                status: status.as_u16(),
                message: format!("Request failed with status {}", status.as_u16()),
            };
        }
        if error.is_decode() {
            return Self::Parse(error.to_string());
        }
        Self::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_display_message_is_backend_message() {
        let err = ApiError::Http {
            status: 403,
            message: "Forbidden for this organization".into(),
        };
        assert_eq!(err.display_message(), "Forbidden for this organization");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn network_display_message_names_the_backend() {
        let err = ApiError::Network("connection refused".into());
        assert!(err.display_message().contains("connection refused"));
        assert_eq!(err.status(), None);
    }
}
