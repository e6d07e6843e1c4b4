//! Persisted feature flags
//!
//! A tiny key/bool store backed by one JSON object on disk. The only flag
//! in use today is the Business unlock, which also notifies in-process
//! listeners so menus can refresh without re-reading the file.

use crate::error::Result;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Storage key for the Business unlock
pub const BUSINESS_UNLOCKED_KEY: &str = "dailyboost:businessUnlocked";

/// Event name broadcast when Business is unlocked
pub const BUSINESS_UNLOCKED_EVENT: &str = "dailyboost:business-unlocked";

const CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct FlagStore {
    path: PathBuf,
}

impl FlagStore {
    /// Store backed by the JSON file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the flag file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Map<String, Value> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Map::new(),
        };
        match serde_json::from_str::<Value>(&data) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!("Ignoring malformed flag file {}", self.path.display());
                Map::new()
            }
        }
    }

    /// Missing file, missing key or a non-true value all read as false
    pub fn get(&self, key: &str) -> bool {
        matches!(self.read_map().get(key), Some(Value::Bool(true)))
    }

    /// Write a flag, creating the file and its directory if needed
    pub fn set(&self, key: &str, value: bool) -> Result<()> {
        let mut map = self.read_map();
        map.insert(key.to_string(), Value::Bool(value));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, data)?;
        debug!("Flag {} = {} ({})", key, value, self.path.display());
        Ok(())
    }
}

/// Business unlock state plus change notification
#[derive(Debug)]
pub struct BusinessAccess {
    store: FlagStore,
    events: broadcast::Sender<&'static str>,
}

impl BusinessAccess {
    /// Access gate over a flag store
    pub fn new(store: FlagStore) -> Self {
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { store, events }
    }

    /// Whether Business has been purchased
    pub fn is_unlocked(&self) -> bool {
        self.store.get(BUSINESS_UNLOCKED_KEY)
    }

    /// Receiver for unlock events
    pub fn subscribe(&self) -> broadcast::Receiver<&'static str> {
        self.events.subscribe()
    }

    /// Persist the unlock and notify listeners. Unlocking twice is harmless.
    pub fn unlock(&self) -> Result<()> {
        self.store.set(BUSINESS_UNLOCKED_KEY, true)?;
        // No receivers is fine
        let _ = self.events.send(BUSINESS_UNLOCKED_EVENT);
        info!("Business dashboard unlocked");
        Ok(())
    }

    /// The underlying flag store
    pub fn store(&self) -> &FlagStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_false() {
        let dir = TempDir::new().unwrap();
        let store = FlagStore::new(dir.path().join("flags.json"));
        assert!(!store.get(BUSINESS_UNLOCKED_KEY));
    }

    #[test]
    fn test_set_and_get() {
        let dir = TempDir::new().unwrap();
        let store = FlagStore::new(dir.path().join("nested/flags.json"));
        store.set("a", true).unwrap();
        store.set("b", false).unwrap();
        assert!(store.get("a"));
        assert!(!store.get("b"));

        let reopened = FlagStore::new(dir.path().join("nested/flags.json"));
        assert!(reopened.get("a"));
    }

    #[test]
    fn test_malformed_file_reads_false() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flags.json");
        fs::write(&path, "not json").unwrap();
        let store = FlagStore::new(&path);
        assert!(!store.get("a"));

        store.set("a", true).unwrap();
        assert!(store.get("a"));
    }

    #[test]
    fn test_unlock_broadcasts() {
        let dir = TempDir::new().unwrap();
        let access = BusinessAccess::new(FlagStore::new(dir.path().join("flags.json")));
        let mut rx = access.subscribe();

        assert!(!access.is_unlocked());
        access.unlock().unwrap();
        assert!(access.is_unlocked());
        assert_eq!(rx.try_recv().unwrap(), BUSINESS_UNLOCKED_EVENT);
    }

    #[test]
    fn test_unlock_without_listeners() {
        let dir = TempDir::new().unwrap();
        let access = BusinessAccess::new(FlagStore::new(dir.path().join("flags.json")));
        access.unlock().unwrap();
        access.unlock().unwrap();
        assert!(access.is_unlocked());
    }
}
