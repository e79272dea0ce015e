//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`IconSource`], [`ImageStatus`] - Icon identifier resolution and image load state
//! - [`NavLink`], [`LinkManifest`] - Navigation page bookmarks

mod icon;
mod link;

pub use icon::{IconSource, ImageStatus, is_image_identifier};
pub use link::{LinkManifest, NavLink};
