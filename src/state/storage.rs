//! Session storage implementations
//!
//! This module defines the key/value storage capability the session helpers
//! depend on, with an in-memory store for tests and embedding and a JSON
//! file store for the command line client.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::utils::errors::{AttendanceError, Result};

/// String key/value storage scoped to one session
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Process-local session storage
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| AttendanceError::Storage("session storage lock poisoned".to_string()))
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Session storage persisted as a JSON object in a single file
///
/// Every mutation rewrites the whole file. A missing file reads as an empty
/// store, and so does a file that is not a JSON object: it is replaced on
/// the next mutation.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

/// Contents of the session file and whether it has to be rewritten
struct Loaded {
    items: HashMap<String, String>,
    corrupt: bool,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Loaded> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Loaded { items: HashMap::new(), corrupt: false });
            }
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Ok(Loaded { items: HashMap::new(), corrupt: false });
        }

        match serde_json::from_str(&data) {
            Ok(items) => Ok(Loaded { items, corrupt: false }),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session file");
                Ok(Loaded { items: HashMap::new(), corrupt: true })
            }
        }
    }

    fn save(&self, items: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, serialized)?;
        debug!(path = %self.path.display(), entries = items.len(), "Session file written");
        Ok(())
    }
}

impl SessionStorage for FileSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.items.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut loaded = self.load()?;
        loaded.items.insert(key.to_string(), value.to_string());
        self.save(&loaded.items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut loaded = self.load()?;
        if loaded.items.remove(key).is_some() || loaded.corrupt {
            self.save(&loaded.items)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemorySessionStorage::new();
        assert_eq!(storage.get_item("user").unwrap(), None);

        storage.set_item("user", "{\"role\":\"admin\"}").unwrap();
        assert_eq!(storage.get_item("user").unwrap().as_deref(), Some("{\"role\":\"admin\"}"));

        storage.remove_item("user").unwrap();
        storage.remove_item("user").unwrap();
        assert_eq!(storage.get_item("user").unwrap(), None);
    }

    #[test]
    fn test_file_storage_persists_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileSessionStorage::new(&path).set_item("user", "{}").unwrap();
        let reopened = FileSessionStorage::new(&path);
        assert_eq!(reopened.get_item("user").unwrap().as_deref(), Some("{}"));

        reopened.remove_item("user").unwrap();
        assert_eq!(FileSessionStorage::new(&path).get_item("user").unwrap(), None);
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("absent.json"));
        assert_eq!(storage.get_item("user").unwrap(), None);
        storage.remove_item("user").unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_corrupt_file_reads_empty_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "garbage").unwrap();
        let storage = FileSessionStorage::new(&path);

        assert_eq!(storage.get_item("user").unwrap(), None);

        storage.set_item("user", "{}").unwrap();
        assert_eq!(storage.get_item("user").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_storage_remove_clears_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "garbage").unwrap();

        FileSessionStorage::new(&path).remove_item("user").unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<HashMap<String, String>>(&contents).unwrap(), HashMap::new());
    }
}
