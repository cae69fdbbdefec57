//! Organization scoping.
//!
//! Every organization-scoped request carries the active organization id in
//! the `X-Organization-UUID` header. The id is chosen at login and stored
//! next to the credentials.

use std::path::PathBuf;

use crate::error::AuthError;
use crate::paths;

const ORG_FILE_NAME: &str = "organization";
const ORG_ENV: &str = "PLATIFYX_AUTH__ORG_ID";

/// Load the active organization id. Priority: `PLATIFYX_AUTH__ORG_ID` env → file.
#[must_use]
pub fn load() -> Option<String> {
    if let Ok(org) = std::env::var(ORG_ENV)
        && !org.trim().is_empty()
    {
        return Some(org.trim().to_string());
    }
    org_path().ok().and_then(|path| paths::read_trimmed(&path))
}

/// Persist the active organization id.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the file cannot be written.
pub fn store(org_id: &str) -> Result<(), AuthError> {
    let org_id = org_id.trim();
    if org_id.is_empty() {
        return Err(AuthError::Other("organization id must not be empty".into()));
    }
    let path = org_path()?;
    paths::write_private(&path, org_id).map_err(AuthError::TokenStoreError)
}

/// Forget the active organization id.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    let path = org_path()?;
    paths::remove_if_exists(&path).map_err(AuthError::TokenStoreError)
}

fn org_path() -> Result<PathBuf, AuthError> {
    Ok(paths::state_dir()?.join(ORG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_org_is_rejected() {
        assert!(matches!(store("   "), Err(AuthError::Other(_))));
    }
}
