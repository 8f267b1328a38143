//! Key-value persistence shim.
//!
//! [`StorageBackend`] is the narrow seam between the content layer and
//! whatever actually holds the bytes (browser `localStorage`, a per-tab
//! `sessionStorage`, or a hash map in tests). [`Store`] layers JSON
//! serialization over a backend and implements the degradation contract:
//! a missing or corrupt value falls back to the caller's default instead
//! of surfacing an error, and a failed write leaves the caller's
//! in-memory state intact.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Synchronous string-keyed storage. Implementations are expected to be
/// durable across page reloads but scoped to one origin and browser
/// profile; the in-memory backend trades durability for test isolation.
pub trait StorageBackend {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize value for `{key}`: {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
    #[error("backend rejected write for `{key}`: {reason}")]
    Backend { key: String, reason: String },
}

/// JSON store over a [`StorageBackend`].
pub struct Store<B> {
    backend: B,
}

impl<B: StorageBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Store { backend }
    }

    /// Whether the backend holds any value under `key`. Used by the
    /// repository's one-time seeding check; a corrupt value still counts
    /// as present so seeding never clobbers it.
    pub fn contains(&self, key: &str) -> bool {
        self.backend.load(key).is_some()
    }

    /// Reads and deserializes the value under `key`. A missing entry
    /// yields `default()`; a present-but-unreadable entry is logged and
    /// also yields `default()`, leaving the stored bytes untouched.
    pub fn get_or<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.backend.load(key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("stored value for `{key}` is unreadable, using defaults: {err}");
                    default()
                }
            },
            None => default(),
        }
    }

    /// Serializes `value` and writes it under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.store(key, &raw)
    }
}

/// Hash-map backend. Clones share the same underlying map, so a "reload"
/// can be simulated by opening a second store over a clone. Used by the
/// unit tests and available as a last-resort fallback where persistent
/// storage is denied.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let store = Store::new(MemoryBackend::new());
        let value: Vec<String> = store.get_or("absent", || vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback".to_string()]);
    }

    #[test]
    fn corrupt_value_falls_back_without_overwriting() {
        let backend = MemoryBackend::new();
        backend.store("broken", "{not json").unwrap();

        let store = Store::new(backend.clone());
        let value: Vec<u32> = store.get_or("broken", || vec![7]);
        assert_eq!(value, vec![7]);
        // the unreadable bytes stay in place
        assert_eq!(backend.load("broken").as_deref(), Some("{not json"));
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = Store::new(MemoryBackend::new());
        store.set("nums", &vec![1u32, 2, 3]).unwrap();
        let value: Vec<u32> = store.get_or("nums", Vec::new);
        assert_eq!(value, vec![1, 2, 3]);
    }
}
