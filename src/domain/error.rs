//! Error types for the list state engine.
//!
//! This module defines the centralized error type [`PostlistError`] and a type alias
//! [`Result`]. Errors only surface at the fallible edges of the crate (content
//! ingestion, configuration loading, file-backed storage, host adapters). The
//! engine itself never propagates them into the mutation path: storage and
//! address-bar failures are logged and swallowed by the reconciler.

use thiserror::Error;

/// The main error type for `postlist` operations.
///
/// Most variants carry a human-readable description. I/O and JSON errors wrap
/// the underlying error via `#[from]` for `?` conversion.
///
/// # Examples
///
/// ```
/// use postlist::PostlistError;
///
/// fn validate_page_size(size: usize) -> Result<usize, PostlistError> {
///     if size == 0 {
///         return Err(PostlistError::Config("page_size must be at least 1".to_string()));
///     }
///     Ok(size)
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PostlistError {
    /// Storage slot read or write failed.
    ///
    /// Raised by [`StorageSlot`](crate::storage::StorageSlot) implementations when
    /// the durable slot is unavailable (quota exceeded, storage disabled, corrupt
    /// backing file). The persisted store swallows it.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing the address bar failed.
    #[error("Location error: {0}")]
    Location(String),

    /// The content collection could not be ingested.
    ///
    /// Occurs when the content source is not a JSON array of objects.
    #[error("Content error: {0}")]
    Content(String),
}

/// A specialized `Result` type for `postlist` operations.
pub type Result<T> = std::result::Result<T, PostlistError>;
