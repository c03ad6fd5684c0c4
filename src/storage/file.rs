// SPDX-License-Identifier: MPL-2.0
//! Persistent key-value area backed by one JSON text file per key.

use super::StorageArea;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage area rooted at a directory.
///
/// Each key maps to `<dir>/<key>.json`; the stored values are UTF-8 JSON
/// text produced by the callers. Reads fail soft: a missing or unreadable
/// file is reported as an absent key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a storage area rooted at `dir`.
    ///
    /// The directory is created lazily on the first write, so constructing a
    /// storage area never touches the filesystem.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Returns the directory this area stores its files under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageArea for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.file_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.file_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        let _ = fs::remove_file(self.file_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn get_missing_key_returns_none() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::new(temp_dir.path().to_path_buf());
        assert_eq!(storage.get("portfolioWorks"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut storage = FileStorage::new(temp_dir.path().to_path_buf());

        storage.set("portfolioWorks", "[]").expect("set should succeed");
        assert_eq!(storage.get("portfolioWorks"), Some("[]".to_string()));
    }

    #[test]
    fn set_overwrites_previous_value() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut storage = FileStorage::new(temp_dir.path().to_path_buf());

        storage.set("key", "first").expect("set");
        storage.set("key", "second").expect("set");
        assert_eq!(storage.get("key"), Some("second".to_string()));
    }

    #[test]
    fn set_creates_missing_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");
        let mut storage = FileStorage::new(nested.clone());

        storage.set("key", "value").expect("set should create dirs");
        assert!(nested.join("key.json").exists());
    }

    #[test]
    fn remove_deletes_the_value() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut storage = FileStorage::new(temp_dir.path().to_path_buf());

        storage.set("key", "value").expect("set");
        storage.remove("key");
        assert_eq!(storage.get("key"), None);
    }

    #[test]
    fn remove_missing_key_is_a_no_op() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut storage = FileStorage::new(temp_dir.path().to_path_buf());
        storage.remove("never-set");
    }

    #[test]
    fn keys_do_not_collide() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut storage = FileStorage::new(temp_dir.path().to_path_buf());

        storage.set("portfolioWorks", "[]").expect("set");
        storage.set("portfolioProfile", "{}").expect("set");

        assert_eq!(storage.get("portfolioWorks"), Some("[]".to_string()));
        assert_eq!(storage.get("portfolioProfile"), Some("{}".to_string()));
    }
}
