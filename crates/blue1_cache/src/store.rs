//! Cache store over a durable key-value backend.

use crate::CacheEntry;
use blue1_storage::KeyValueStore;
use serde_json::Value as JsonValue;

/// Keyed storage of [`CacheEntry`] values.
///
/// A cache store never fails a request: backend errors are logged and
/// surface as a miss on `get` or a skipped write on `put`.
#[async_trait::async_trait]
pub trait CacheStore: Send + Sync {
    /// The entry stored under `key`, if any.
    async fn get(&self, key: &str) -> Option<CacheEntry>;

    /// Store `payload` under `key` stamped with the current time, replacing
    /// any prior entry.
    async fn put(&self, key: &str, payload: JsonValue) {
        self.put_entry(key, CacheEntry::now(payload)).await;
    }

    /// Store a prepared entry under `key`.
    async fn put_entry(&self, key: &str, entry: CacheEntry);

    /// Number of stored entries.
    async fn len(&self) -> usize;
}

/// Cache store that persists every entry through a [`KeyValueStore`].
///
/// # Example
///
/// ```
/// use blue1_cache::{CacheStore, PersistentCache};
/// use blue1_storage::MemoryStore;
/// use serde_json::json;
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache = PersistentCache::new(MemoryStore::new());
/// cache.put("status", json!({ "is_datafeed_down": false })).await;
///
/// let entry = cache.get("status").await.unwrap();
/// assert_eq!(entry.payload()["is_datafeed_down"], false);
/// # }
/// ```
#[derive(Debug)]
pub struct PersistentCache<S> {
    backend: S,
}

impl<S: KeyValueStore> PersistentCache<S> {
    /// Wrap a storage backend.
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }
}

#[async_trait::async_trait]
impl<S: KeyValueStore> CacheStore for PersistentCache<S> {
    async fn get(&self, key: &str) -> Option<CacheEntry> {
        let value = match self.backend.get(key).await {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(key, error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_value::<CacheEntry>(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(key, error = %e, "Undecodable cache entry, treating as miss");
                None
            }
        }
    }

    #[tracing::instrument(skip(self, entry), fields(fetched_at = %entry.fetched_at()))]
    async fn put_entry(&self, key: &str, entry: CacheEntry) {
        let value = match serde_json::to_value(&entry) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e, "Could not encode cache entry, skipping write");
                return;
            }
        };

        match self.backend.put(key, value).await {
            Ok(()) => tracing::debug!(key, "Stored cache entry"),
            Err(e) => tracing::error!(key, error = %e, "Cache write failed, skipping"),
        }
    }

    async fn len(&self) -> usize {
        self.backend.len().await
    }
}
