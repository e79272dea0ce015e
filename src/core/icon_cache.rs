//! Persistent set of icon identifiers known to have loaded.
//!
//! An identifier enters the cache only after its image fired a native
//! `load` event. The set is rehydrated once from durable storage and
//! rewritten wholesale on every new insertion. Nothing is ever evicted.
//!
//! The cache exists to skip the fade-in on repeat renders: a cache hit is
//! shown at full opacity immediately.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use leptos::logging::warn;

use crate::core::error::CacheError;
use crate::core::storage::KeyValueStore;

struct Inner {
    key: String,
    store: Arc<dyn KeyValueStore>,
    loaded: RwLock<HashSet<String>>,
}

/// Shared handle to the icon cache.
///
/// Cloning is cheap and every clone sees the same set. The handle is
/// constructed by the composition root and provided through context.
#[derive(Clone)]
pub struct IconCache {
    inner: Arc<Inner>,
}

impl IconCache {
    /// Rehydrate the cache from `store`.
    ///
    /// A missing entry yields an empty cache. A malformed entry is logged
    /// and also yields an empty cache; it is overwritten on the next insert.
    pub fn load(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let loaded = match store.get_item(&key) {
            None => HashSet::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    warn!("Discarding unreadable icon cache '{}': {}", key, e);
                    HashSet::new()
                }
            },
        };

        Self {
            inner: Arc::new(Inner {
                key,
                store,
                loaded: RwLock::new(loaded),
            }),
        }
    }

    /// Check whether `identifier` has loaded successfully before.
    pub fn has(&self, identifier: &str) -> bool {
        self.inner
            .loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(identifier)
    }

    /// Record a successful load.
    ///
    /// Returns `true` if the identifier was new. New identifiers trigger a
    /// best-effort persist; a failed write is logged and otherwise ignored.
    pub fn add(&self, identifier: &str) -> bool {
        let inserted = self
            .inner
            .loaded
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(identifier.to_string());

        if inserted && let Err(e) = self.persist() {
            warn!("Failed to save icon cache to localStorage: {}", e);
        }
        inserted
    }

    /// Write the whole set to durable storage as a JSON array.
    pub fn persist(&self) -> Result<(), CacheError> {
        let json = serde_json::to_string(&self.identifiers())
            .map_err(|e| CacheError::SerializationFailed(e.to_string()))?;
        self.inner.store.set_item(&self.inner.key, &json)
    }

    /// Number of cached identifiers.
    pub fn len(&self) -> usize {
        self.inner
            .loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted snapshot of the cached identifiers.
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .inner
            .loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect();
        ids.sort();
        ids
    }
}
