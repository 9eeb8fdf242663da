//! File-backed store, one file per key.

use std::fs;
use std::path::PathBuf;

use super::KeyValueStore;
use crate::error::StoreError;

/// Disk-based store keeping each key's value in `<key>.json` under its
/// directory.
#[derive(Debug, Clone)]
pub struct DiskStore {
    data_dir: PathBuf,
}

impl DiskStore {
    /// Create a new DiskStore with the given directory. The directory is
    /// created lazily on first write.
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Get the default data directory: ~/.recipeshare/data
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".recipeshare").join("data"))
            .unwrap_or_else(|| PathBuf::from("data/store"))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for DiskStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DiskStore::new(dir.path().to_path_buf());

        store.set("recipeShare_recipes", "[]").unwrap();
        assert_eq!(store.get("recipeShare_recipes"), Some("[]".to_string()));
        assert!(store.contains("recipeShare_recipes"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("recipeShare_recipes"), None);
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DiskStore::new(dir.path().to_path_buf());

        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
        // Removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = DiskStore::new(dir.path().to_path_buf());
            store.set("k", "persisted").unwrap();
        }
        let store = DiskStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("k"), Some("persisted".to_string()));
    }
}
