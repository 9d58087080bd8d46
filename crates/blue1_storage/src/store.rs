//! Storage backend trait.

use blue1_error::Blue1Result;
use serde_json::Value as JsonValue;

/// A durable map from string keys to JSON values.
///
/// Implementations must be safe to share across tasks. A successful `put`
/// is visible to every later `get`, and for persistent backends it has
/// reached stable storage before returning.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Look up a value. `Ok(None)` if the key was never stored.
    async fn get(&self, key: &str) -> Blue1Result<Option<JsonValue>>;

    /// Store a value, replacing any prior value under the same key.
    async fn put(&self, key: &str, value: JsonValue) -> Blue1Result<()>;

    /// Delete a key, returning its previous value.
    async fn remove(&self, key: &str) -> Blue1Result<Option<JsonValue>>;

    /// Number of stored keys.
    async fn len(&self) -> usize;

    /// Whether the store holds no keys.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
