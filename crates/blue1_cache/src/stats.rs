//! Hit and miss accounting.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic cache hit/miss counters.
///
/// Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    inner: Arc<CacheStatsInner>,
}

#[derive(Debug, Default)]
struct CacheStatsInner {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request served from the cache.
    pub fn record_hit(&self) {
        self.inner.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a request that needed a live fetch.
    pub fn record_miss(&self) {
        self.inner.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Requests served from the cache.
    pub fn hits(&self) -> u64 {
        self.inner.hits.load(Ordering::Relaxed)
    }

    /// Requests that needed a live fetch.
    pub fn misses(&self) -> u64 {
        self.inner.misses.load(Ordering::Relaxed)
    }

    /// `hits / (hits + misses)`, or `None` before any counted request.
    ///
    /// ```
    /// use blue1_cache::CacheStats;
    ///
    /// let stats = CacheStats::new();
    /// assert_eq!(stats.hit_rate(), None);
    ///
    /// stats.record_hit();
    /// stats.record_hit();
    /// stats.record_hit();
    /// stats.record_miss();
    /// assert_eq!(stats.hit_rate(), Some(0.75));
    /// ```
    pub fn hit_rate(&self) -> Option<f64> {
        self.snapshot().hit_rate
    }

    /// Point-in-time copy of the counters.
    pub fn snapshot(&self) -> CacheStatsSnapshot {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        CacheStatsSnapshot {
            hits,
            misses,
            hit_rate: (total > 0).then(|| hits as f64 / total as f64),
        }
    }
}

/// Serializable view of [`CacheStats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CacheStatsSnapshot {
    /// Requests served from the cache
    pub hits: u64,
    /// Requests that needed a live fetch
    pub misses: u64,
    /// Fraction of counted requests served from the cache
    pub hit_rate: Option<f64>,
}
