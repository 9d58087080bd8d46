//! Cache entries.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Duration;

/// A stored response and when it was fetched.
///
/// Persisted as `{ "timestamp": <RFC 3339>, "payload": <json> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct CacheEntry {
    #[serde(rename = "timestamp")]
    fetched_at: DateTime<Utc>,
    payload: JsonValue,
}

impl CacheEntry {
    /// Create an entry fetched at `fetched_at`.
    pub fn new(payload: JsonValue, fetched_at: DateTime<Utc>) -> Self {
        Self {
            fetched_at,
            payload,
        }
    }

    /// Create an entry fetched now.
    pub fn now(payload: JsonValue) -> Self {
        Self::new(payload, Utc::now())
    }

    /// How long ago the entry was fetched, relative to `now`.
    ///
    /// Zero when `fetched_at` lies in the future.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.fetched_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// An entry is stale once its age exceeds `ttl`; an age of exactly
    /// `ttl` is still fresh.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) <= ttl
    }

    /// Take the payload out of the entry.
    pub fn into_payload(self) -> JsonValue {
        self.payload
    }
}
