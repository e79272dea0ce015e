//! Browser utilities.
//!
//! - [`dom`] - window and localStorage access
//! - [`fetch_json`] - JSON fetching with timeout

pub mod dom;
mod fetch;

pub use fetch::fetch_json;
