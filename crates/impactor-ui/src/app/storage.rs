//! Browser `localStorage` backend for the preference store.
//!
//! Values are written verbatim (no JSON encoding) so stored entries read as
//! `fr` or `true`, not `"fr"`.

use crate::core::storage::{KeyValueStore, MemoryStorage, StorageError};
use gloo::utils::window;

pub(crate) struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub(crate) fn open() -> Result<Self, StorageError> {
        window()
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .map(|inner| Self { inner })
            .ok_or_else(|| StorageError::Unavailable("window.localStorage is null".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.inner.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("storage get failed for {key}: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = self.inner.set_item(key, value) {
            log::warn!("storage set failed for {key}: {err:?}");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(err) = self.inner.remove_item(key) {
            log::warn!("storage remove failed for {key}: {err:?}");
        }
    }
}

/// Storage handed to preference actions; degrades to a throwaway in-memory
/// store when the browser refuses `localStorage` (e.g. sandboxed iframes).
pub(crate) enum AppStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl KeyValueStore for AppStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Browser(storage) => storage.get(key),
            Self::Memory(storage) => storage.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            Self::Browser(storage) => storage.set(key, value),
            Self::Memory(storage) => storage.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) {
        match self {
            Self::Browser(storage) => storage.remove(key),
            Self::Memory(storage) => storage.remove(key),
        }
    }
}

pub(crate) fn open_storage() -> AppStorage {
    match BrowserStorage::open() {
        Ok(storage) => AppStorage::Browser(storage),
        Err(err) => {
            log::warn!("{err}; preferences will not persist");
            AppStorage::Memory(MemoryStorage::new())
        }
    }
}
