//! Key-value store trait.
//!
//! A text store keyed by string, in the manner of browser local storage.
//! Implementations live in gymchat-infra (file-backed) and in
//! [`super::memory`] (in-memory).

use gymchat_types::error::StorageError;

/// Trait for durable key-value text storage.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition). No other
/// writer is assumed; the last write wins.
pub trait KvStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Set a value for a key (upsert).
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;

    /// Remove a key. No-op if the key does not exist.
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<(), StorageError>> + Send;
}
