//! Location of the per-user state directory (`~/.platifyx`).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const STATE_DIR_NAME: &str = ".platifyx";

/// `~/.platifyx`, or `$PLATIFYX_HOME` when set (tests, sandboxes).
pub(crate) fn state_dir() -> Result<PathBuf, AuthError> {
    if let Ok(dir) = std::env::var("PLATIFYX_HOME")
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|h| h.join(STATE_DIR_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found, cannot store credentials".into())
        })
}

/// Write `contents` to `path` with owner-only permissions on Unix.
pub(crate) fn write_private(path: &Path, contents: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("mkdir {}: {e}", parent.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, contents).map_err(|e| format!("write {}: {e}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| format!("chmod {}: {e}", path.display()))?;
    }

    Ok(())
}

/// Read a file, treating missing and whitespace-only content as absent.
pub(crate) fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Remove a file if it exists.
pub(crate) fn remove_if_exists(path: &Path) -> Result<(), String> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| format!("failed to delete {}: {e}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_remove_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("nested").join("credentials");

        write_private(&path, "tok_abc123\n").expect("write");
        assert_eq!(read_trimmed(&path).as_deref(), Some("tok_abc123"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
            assert_eq!(mode, 0o600, "credentials file should be 0600");
        }

        remove_if_exists(&path).expect("remove");
        assert!(!path.exists());
        remove_if_exists(&path).expect("second remove is a no-op");
    }

    #[test]
    fn whitespace_only_is_absent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("credentials");
        fs::write(&path, "   \n  ").expect("write");
        assert!(read_trimmed(&path).is_none());
    }
}
