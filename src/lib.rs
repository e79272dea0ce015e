//! Bookmark navigation page.
//!
//! - [`components`] - Leptos views (`SmartIcon`, `SyncIndicator`, `NavPage`)
//! - [`core`] - icon cache, storage, sync broadcasting, localization
//! - [`models`] - icon identifier and link types

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{App, AppContext};
