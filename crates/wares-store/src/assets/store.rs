//! Filesystem-backed asset store
//!
//! Writes product image blobs under a content root, creating the root
//! lazily, and deletes them idempotently.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use wares_core::errors::{Result, WaresError};

use crate::assets::atomic::atomic_write;
use crate::assets::key::{self, AssetKey};
use crate::errors::io_error;

/// Filesystem asset store rooted at a content directory
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Create an asset store over the given content root
    ///
    /// The directory itself is created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Content root this store writes under
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Generate a fresh key for a blob with the given original filename
    ///
    /// Exposed separately from [`store`](Self::store) so a caller can hold
    /// a key across a failed write.
    pub fn generate_key(&self, original_name: &str) -> AssetKey {
        key::generate_key(original_name)
    }

    /// Write a blob under an already generated key
    ///
    /// Ensures the content root exists, then writes atomically,
    /// overwriting any same-named file.
    ///
    /// # Errors
    /// Returns `AssetWrite` if the root cannot be created or the write
    /// fails (disk full, permission denied).
    pub fn write(&self, key: &AssetKey, content: &[u8]) -> Result<()> {
        atomic_write(&self.path_of(key), content).map_err(|e| WaresError::AssetWrite {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        debug!(key = %key, bytes = content.len(), "asset written");
        Ok(())
    }

    /// Generate a key and write the blob in one step
    ///
    /// # Errors
    /// Returns `AssetWrite` as [`write`](Self::write) does.
    pub fn store(&self, content: &[u8], original_name: &str) -> Result<AssetKey> {
        let key = self.generate_key(original_name);
        self.write(&key, content)?;
        Ok(key)
    }

    /// Delete the blob with the given key
    ///
    /// A missing blob is not an error; deletion is idempotent.
    ///
    /// # Errors
    /// Returns `AssetDelete` on I/O failures other than not-found.
    pub fn delete(&self, key: &AssetKey) -> Result<()> {
        match fs::remove_file(self.path_of(key)) {
            Ok(()) => {
                debug!(key = %key, "asset deleted");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WaresError::AssetDelete {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Read a blob's bytes back
    ///
    /// # Errors
    /// Returns `Io` if the blob is missing or unreadable.
    pub fn read(&self, key: &AssetKey) -> Result<Vec<u8>> {
        fs::read(self.path_of(key)).map_err(|e| io_error("read_asset", e))
    }

    /// Whether a blob with the given key exists
    pub fn contains(&self, key: &AssetKey) -> bool {
        self.path_of(key).is_file()
    }

    fn path_of(&self, key: &AssetKey) -> PathBuf {
        self.root.join(key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_store() -> (AssetStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = AssetStore::new(temp_dir.path().join("images"));
        (store, temp_dir)
    }

    #[test]
    fn test_store_read_roundtrip() {
        let (store, _dir) = setup_test_store();

        let key = store.store(b"PNG bytes", "chair.png").unwrap();

        assert!(store.contains(&key));
        assert_eq!(store.read(&key).unwrap(), b"PNG bytes");
    }

    #[test]
    fn test_store_creates_missing_root() {
        let (store, _dir) = setup_test_store();
        assert!(!store.root().exists());

        store.store(b"x", "a.png").unwrap();

        assert!(store.root().is_dir());
    }

    #[test]
    fn test_write_overwrites_same_key() {
        let (store, _dir) = setup_test_store();

        let key = store.store(b"first", "a.png").unwrap();
        store.write(&key, b"second").unwrap();

        assert_eq!(store.read(&key).unwrap(), b"second");
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (store, _dir) = setup_test_store();

        let key = store.store(b"bytes", "a.png").unwrap();
        store.delete(&key).unwrap();
        assert!(!store.contains(&key));

        // Deleting a missing blob is not an error
        store.delete(&key).unwrap();
        store.delete(&AssetKey::from("never-existed.png")).unwrap();
    }

    #[test]
    fn test_write_fails_when_root_cannot_be_created() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the content root should go
        let blocker = temp_dir.path().join("blocked");
        fs::write(&blocker, b"file").unwrap();

        let store = AssetStore::new(blocker.join("images"));
        let result = store.store(b"bytes", "a.png");

        assert!(matches!(result, Err(WaresError::AssetWrite { .. })));
    }

    #[test]
    fn test_read_missing_is_io_error() {
        let (store, _dir) = setup_test_store();
        let result = store.read(&AssetKey::from("missing.png"));
        assert!(matches!(result, Err(WaresError::Io { .. })));
    }
}
