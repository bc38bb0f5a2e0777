//! File-backed key-value store.
//!
//! Implements `KvStore` from `gymchat-core` with one file per key:
//!
//! ```text
//! {root}/
//!   gymchat_history.json
//! ```
//!
//! Writes go to a sibling temp file first and are renamed into place, so a
//! crash mid-write leaves either the old or the new value on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gymchat_core::storage::KvStore;
use gymchat_types::error::StorageError;

/// Filesystem-backed implementation of `KvStore`.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compute the file path for a key.
    ///
    /// Keys are restricted to ASCII letters, digits, `_`, `-` and `.`, and may
    /// not start with a dot, so a key can never escape the root directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KvStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("read {}: {e}", path.display()))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::Io(format!("create {}: {e}", self.root.display())))?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| StorageError::Io(format!("write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StorageError::Io(format!("rename to {}: {e}", path.display())))?;

        tracing::debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("remove {}: {e}", path.display()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = FileKvStore::new(dir.path().join("storage"));
        assert_eq!(store.get("gymchat_history").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_root_and_overwrites() {
        let dir = tempdir().unwrap();
        let store = FileKvStore::new(dir.path().join("nested").join("storage"));

        store.set("gymchat_history", "[]").await.unwrap();
        store.set("gymchat_history", r#"[{"role":"user","content":"hi"}]"#).await.unwrap();

        assert_eq!(
            store.get("gymchat_history").await.unwrap().as_deref(),
            Some(r#"[{"role":"user","content":"hi"}]"#)
        );
        assert!(store.root().join("gymchat_history.json").exists());
        assert!(!store.root().join("gymchat_history.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileKvStore::new(dir.path());

        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let store = FileKvStore::new(dir.path());

        for key in ["", "../escape", ".hidden", "a/b", "with space"] {
            assert_eq!(
                store.set(key, "x").await,
                Err(StorageError::InvalidKey(key.to_string()))
            );
        }
    }
}
