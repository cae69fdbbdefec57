//! # plx-auth
//!
//! Credentials and durable client state for the PlatifyX CLI.
//!
//! Provides OS keychain token storage (`keyring`) with env var and file
//! fallbacks, the active organization id, JWT expiry inspection, and a small
//! key/value store used to remember in-flight generation jobs between runs.

pub mod error;
pub mod expiry;
pub mod org;
mod paths;
pub mod storage;
pub mod token_store;

pub use error::AuthError;
pub use storage::{ClientStore, FileStore, MemoryStore};

/// Bearer token and organization id attached to outgoing requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: Option<String>,
    pub org_id: Option<String>,
}

impl Credentials {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Source of credentials, consulted once per request so that a login or
/// logout in another process takes effect without restarting.
pub trait CredentialSource: Send + Sync {
    fn credentials(&self) -> Credentials;
}

/// Reads the keyring / env / file tiers on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredCredentials;

impl CredentialSource for StoredCredentials {
    fn credentials(&self) -> Credentials {
        resolve_credentials()
    }
}

/// Fixed credentials.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(pub Credentials);

impl StaticCredentials {
    #[must_use]
    pub fn new(token: Option<&str>, org_id: Option<&str>) -> Self {
        Self(Credentials {
            token: token.map(str::to_string),
            org_id: org_id.map(str::to_string),
        })
    }
}

impl CredentialSource for StaticCredentials {
    fn credentials(&self) -> Credentials {
        self.0.clone()
    }
}

/// Resolve the best available credentials.
///
/// Token priority: keyring → env var → file. Organization: env var → file.
#[must_use]
pub fn resolve_credentials() -> Credentials {
    Credentials {
        token: token_store::load(),
        org_id: org::load(),
    }
}

/// Persist a token and, optionally, the organization to act on.
///
/// # Errors
///
/// Returns `AuthError::Other` for an empty token, or a store error if nothing
/// could be persisted.
pub fn login(token: &str, org_id: Option<&str>) -> Result<(), AuthError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::Other("token must not be empty".into()));
    }
    if expiry::is_expired(token) == Some(true) {
        tracing::warn!("stored token is already expired");
    }
    token_store::store(token)?;
    if let Some(org_id) = org_id {
        org::store(org_id)?;
    }
    Ok(())
}

/// Clear stored credentials and the active organization.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if a file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()?;
    org::delete()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_credentials_are_returned_verbatim() {
        let source = StaticCredentials::new(Some("tok"), Some("org-1"));
        let creds = source.credentials();
        assert!(creds.is_authenticated());
        assert_eq!(creds.org_id.as_deref(), Some("org-1"));
    }

    #[test]
    fn login_rejects_blank_token() {
        assert!(matches!(login("  ", None), Err(AuthError::Other(_))));
    }
}
