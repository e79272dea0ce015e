//! UI components built with Leptos.
//!
//! - [`icons`] - Glyph registry and fixed glyphs
//! - [`SmartIcon`] - Icon renderer for URLs, data URIs, glyph names and emoji
//! - [`SyncIndicator`] - Spinner shown while a background sync runs
//! - [`NavPage`] - Bookmark grid (main page)

pub mod icons;
pub mod nav;
pub mod smart_icon;
pub mod sync_indicator;

pub use nav::NavPage;
pub use smart_icon::SmartIcon;
pub use sync_indicator::{SyncContext, SyncIndicator, SyncVisibility};
