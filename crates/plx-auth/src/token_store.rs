use std::path::PathBuf;

use crate::error::AuthError;
use crate::paths;

const DEFAULT_KEYRING_SERVICE: &str = "platifyx-cli";
const KEYRING_USER: &str = "api-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV: &str = "PLATIFYX_AUTH__TOKEN";

/// Returns the keyring service name.
///
/// Defaults to `"platifyx-cli"`. Override via `PLATIFYX_KEYRING_SERVICE` for
/// testing to avoid touching real credentials.
fn keyring_service() -> String {
    std::env::var("PLATIFYX_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store a bearer token in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if both keyring and file storage fail.
pub fn store(token: &str) -> Result<(), AuthError> {
    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(token) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(token)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(token)
        }
    }
}

/// Load a token. Priority: keyring → `PLATIFYX_AUTH__TOKEN` env → file (`~/.platifyx/credentials`).
#[must_use]
pub fn load() -> Option<String> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(token) = entry.get_password()
        && !token.is_empty()
    {
        return Some(token);
    }

    if let Ok(token) = std::env::var(TOKEN_ENV)
        && !token.is_empty()
    {
        return Some(token);
    }

    credentials_path().ok().and_then(|path| paths::read_trimmed(&path))
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // May not exist.
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    let path = credentials_path()?;
    paths::remove_if_exists(&path).map_err(AuthError::TokenStoreError)
}

/// Detect which tier the current token came from (for status display).
#[must_use]
pub fn detect_token_source() -> Option<String> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && entry.get_password().is_ok_and(|t| !t.is_empty())
    {
        return Some("keyring".into());
    }
    if std::env::var(TOKEN_ENV).is_ok_and(|t| !t.is_empty()) {
        return Some("env".into());
    }
    if credentials_path()
        .ok()
        .and_then(|path| paths::read_trimmed(&path))
        .is_some()
    {
        return Some("file".into());
    }
    None
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    Ok(paths::state_dir()?.join(CREDENTIALS_FILE_NAME))
}

fn store_file(token: &str) -> Result<(), AuthError> {
    let path = credentials_path()?;
    paths::write_private(&path, token).map_err(AuthError::TokenStoreError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_path_is_under_state_dir() {
        let path = credentials_path().expect("should resolve");
        assert!(path.ends_with("credentials"));
    }
}
