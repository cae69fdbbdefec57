//! Durable client-side key/value state.
//!
//! Holds the ids of in-flight generation jobs so that a later invocation can
//! resume polling them. [`FileStore`] persists a flat JSON object on disk;
//! [`MemoryStore`] backs tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuthError;
use crate::paths;

/// Key under which the in-flight documentation job id is stored.
pub const TECHDOCS_PROGRESS_KEY: &str = "platifyx-techdocs-progress";
/// Key under which the in-flight playbook job id is stored.
pub const PLAYBOOK_PROGRESS_KEY: &str = "platifyx-playbook-progress";

const STATE_FILE_NAME: &str = "state.json";

pub trait ClientStore: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AuthError::StorageError`] if the backing store is unreadable.
    fn get(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// # Errors
    ///
    /// Returns [`AuthError::StorageError`] if the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), AuthError>;

    /// Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::StorageError`] if the store cannot be rewritten.
    fn remove(&self, key: &str) -> Result<(), AuthError>;
}

/// JSON object on disk, rewritten on every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `~/.platifyx/state.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn open_default() -> Result<Self, AuthError> {
        Ok(Self::new(paths::state_dir()?.join(STATE_FILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, AuthError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AuthError::StorageError(format!("corrupt state file {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(AuthError::StorageError(format!(
                "read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(map)
            .map_err(|e| AuthError::StorageError(e.to_string()))?;
        paths::write_private(&self.path, &json).map_err(AuthError::StorageError)
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ClientStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        let _guard = self.guard();
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let _guard = self.guard();
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        let _guard = self.guard();
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ClientStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AuthError> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_store_survives_reopen() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("state.json");

        let store = FileStore::new(&path);
        store.set(TECHDOCS_PROGRESS_KEY, "job-1").expect("set");
        store.set(PLAYBOOK_PROGRESS_KEY, "job-2").expect("set");
        drop(store);

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get(TECHDOCS_PROGRESS_KEY).expect("get").as_deref(),
            Some("job-1")
        );
        reopened.remove(TECHDOCS_PROGRESS_KEY).expect("remove");
        assert_eq!(reopened.get(TECHDOCS_PROGRESS_KEY).expect("get"), None);
        assert_eq!(
            reopened.get(PLAYBOOK_PROGRESS_KEY).expect("get").as_deref(),
            Some("job-2")
        );
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path().join("absent.json"));
        assert_eq!(store.get("anything").expect("get"), None);
        store.remove("anything").expect("remove on empty store");
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("state.json");
        fs::write(&path, "not json").expect("write");
        let store = FileStore::new(&path);
        assert!(matches!(store.get("k"), Err(AuthError::StorageError(_))));
    }

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "a").unwrap();
        store.set("k", "b").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("b"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
