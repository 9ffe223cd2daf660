//! # Filesystem-backed key/value store
//!
//! [`FileStore`] keeps each key in its own file so the session survives
//! restarts of a native build.
//!
//! ```text
//! <base_dir>/
//! ├── token
//! └── user
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) to obtain a platform
//! base such as `~/.local/share/saveurs/` on Linux.

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create store directory {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("Failed to write key {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("saveurs");

        let store = FileStore::new(dir.clone());
        store.set("token", "header.payload.sig");

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("token").as_deref(), Some("header.payload.sig"));

        reopened.remove("token");
        assert!(store.get("token").is_none());

        // Removing a missing key is a no-op
        reopened.remove("token");
    }

    #[test]
    fn test_keys_are_sanitised() {
        let store = FileStore::new(PathBuf::from("/tmp/base"));
        assert_eq!(store.key_path("../etc/passwd"), PathBuf::from("/tmp/base/___etc_passwd"));
    }
}
