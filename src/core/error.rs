//! Custom error types for the application.
//!
//! Errors are categorized per domain:
//!
//! - [`CacheError`] - durable key-value storage for the icon cache
//! - [`FetchError`] - network fetches for the links manifest
//!
//! Neither type escapes a component. Callers map them to a fallback view
//! or log them and carry on.

use thiserror::Error;

/// Durable storage errors for the icon cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// localStorage not available.
    #[error("localStorage not available")]
    StorageUnavailable,
    /// Failed to serialize the cache to JSON.
    #[error("failed to serialize icon cache: {0}")]
    SerializationFailed(String),
    /// Failed to write to storage (quota exceeded, private mode, ...).
    #[error("failed to write to storage")]
    WriteFailed,
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network request failed (CORS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}
