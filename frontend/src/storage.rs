//! Browser implementations of the content store's storage seam.
//!
//! `localStorage` backs the durable content slots and `sessionStorage`
//! backs the per-tab admin flag. Both are origin-scoped and synchronous.

use common::content::store::{StorageBackend, StorageError};
use web_sys::Storage;

/// Durable per-origin storage. Survives reloads and browser restarts but
/// never leaves this browser profile.
#[derive(Clone)]
pub struct LocalStorageBackend {
    storage: Storage,
}

impl LocalStorageBackend {
    /// `None` when the browser denies storage access (private mode with
    /// storage disabled, or an embedded context).
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(LocalStorageBackend { storage })
    }
}

impl StorageBackend for LocalStorageBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Backend {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Per-tab storage. Dropped when the tab closes, which is exactly the
/// lifetime the admin session flag wants.
#[derive(Clone)]
pub struct SessionStorageBackend {
    storage: Storage,
}

impl SessionStorageBackend {
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.session_storage().ok().flatten()?;
        Some(SessionStorageBackend { storage })
    }
}

impl StorageBackend for SessionStorageBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Backend {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}
