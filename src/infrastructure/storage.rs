//! Key-value persistence for the blog stores
//!
//! Each key holds one JSON document that is rewritten in full on every save.

use crate::error::{QuireError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;

/// Storage key for the article collection
pub const ARTICLES_KEY: &str = "articles";
/// Storage key for the admin session record
pub const SESSION_KEY: &str = "session";

/// Abstract key-value store holding raw JSON documents
pub trait Storage {
    /// Read the document stored under `key`, if any
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Load and decode the document under `key`
pub fn read_json<T: DeserializeOwned>(storage: &impl Storage, key: &str) -> Result<Option<T>> {
    match storage.read(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| QuireError::CorruptStore {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Encode `value` and store it under `key`
pub fn write_json<T: Serialize + ?Sized>(storage: &impl Storage, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string_pretty(value)?;
    storage.write(key, &raw)
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        FileStorage { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(QuireError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_path = self
            .dir
            .join(format!("{}.json.quire-tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value)?;

        // rename does not replace an existing file on Windows
        #[cfg(windows)]
        {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }

        fs::rename(&tmp_path, &path)?;
        debug!(key, path = %path.display(), bytes = value.len(), "persisted document");
        Ok(())
    }
}

/// Process-local storage; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_missing_key() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().to_path_buf());
        assert_eq!(storage.read("articles").unwrap(), None);
    }

    #[test]
    fn test_file_storage_write_then_read() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().to_path_buf());

        storage.write("articles", "[]").unwrap();

        assert!(temp.path().join("articles.json").exists());
        assert_eq!(storage.read("articles").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_storage_overwrites_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().to_path_buf());

        storage.write("session", "one").unwrap();
        storage.write("session", "two").unwrap();

        assert_eq!(storage.read("session").unwrap().as_deref(), Some("two"));
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("quire-tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_file_storage_creates_directory() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("nested").join(".quire"));

        storage.write("articles", "[]").unwrap();

        assert!(temp.path().join("nested/.quire/articles.json").exists());
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        storage.write("k", "v").unwrap();

        assert_eq!(other.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_read_json_reports_corrupt_key() {
        let storage = MemoryStorage::new();
        storage.write(ARTICLES_KEY, "{broken").unwrap();

        match read_json::<Vec<String>>(&storage, ARTICLES_KEY) {
            Err(QuireError::CorruptStore { key, .. }) => assert_eq!(key, "articles"),
            other => panic!("Expected CorruptStore, got {:?}", other),
        }
    }

    #[test]
    fn test_write_json_then_read_json() {
        let storage = MemoryStorage::new();
        write_json(&storage, "numbers", &vec![1, 2, 3]).unwrap();

        let loaded: Option<Vec<i32>> = read_json(&storage, "numbers").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }
}
