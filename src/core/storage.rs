//! Durable key-value storage backends.
//!
//! The icon cache talks to storage only through [`KeyValueStore`], so the
//! composition root decides whether it is backed by the browser's
//! localStorage or by an in-memory map.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::core::error::CacheError;
use crate::utils::dom;

/// A string-to-string store scoped to the current origin/user.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. Unreadable storage is reported as `None`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// localStorage-backed store.
///
/// The `Storage` handle is looked up on every call; it is not `Send`, and
/// lookups are cheap.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let storage = dom::local_storage().ok_or(CacheError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| CacheError::WriteFailed)
    }
}

/// In-process store, used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a single entry.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
