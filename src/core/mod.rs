//! Core logic behind the UI components.
//!
//! This module provides:
//! - [`IconCache`] persistent set of successfully loaded icon images
//! - [`KeyValueStore`] durable storage backends
//! - [`SyncStatusHub`] sync status broadcasting with scoped [`Subscription`]s
//! - [`Locale`] reactive localization lookup
//! - [`load_links`] navigation manifest loading

pub mod error;
pub mod i18n;
mod icon_cache;
mod links;
pub mod storage;
pub mod sync;

pub use i18n::{Language, Locale};
pub use icon_cache::IconCache;
pub use links::load_links;
pub use storage::{KeyValueStore, LocalStore, MemoryStore};
pub use sync::{Subscription, SyncCallback, SyncGuard, SyncStatusHub, SyncStatusSource};
