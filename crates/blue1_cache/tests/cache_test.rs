//! Tests for the persistent cache, expiration setting and counters.

use blue1_cache::{
    parse_ttl, CacheEntry, CacheStats, CacheStore, CacheTtl, PersistentCache, TtlUnit,
    CACHE_EXPIRATION_KEY,
};
use blue1_error::Blue1ErrorKind;
use blue1_storage::{JsonFileStore, KeyValueStore, MemoryStore};
use chrono::{TimeDelta, Utc};
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_get_absent_key() {
    let cache = PersistentCache::new(MemoryStore::new());
    assert!(cache.get("team/frc254").await.is_none());
}

#[tokio::test]
async fn test_put_overwrites_whole_entry() {
    let cache = PersistentCache::new(MemoryStore::new());
    let stale = CacheEntry::new(json!({ "rank": 4 }), Utc::now() - TimeDelta::hours(3));
    cache.put_entry("event/2023cabl/rankings", stale).await;

    cache.put("event/2023cabl/rankings", json!({ "rank": 1 })).await;

    let entry = cache.get("event/2023cabl/rankings").await.unwrap();
    assert_eq!(entry.payload(), &json!({ "rank": 1 }));
    assert!(entry.age(Utc::now()) < Duration::from_secs(60));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_entries_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("blue1").join("cache.json");

    {
        let cache = PersistentCache::new(JsonFileStore::open(&path).await.unwrap());
        cache.put("status", json!({ "is_datafeed_down": false })).await;
    }

    let cache = PersistentCache::new(JsonFileStore::open(&path).await.unwrap());
    let entry = cache.get("status").await.unwrap();
    assert_eq!(entry.payload()["is_datafeed_down"], false);

    // Stored as { timestamp, payload } under the request path.
    let raw = cache.backend().get("status").await.unwrap().unwrap();
    assert!(raw.get("timestamp").is_some());
    assert!(raw.get("payload").is_some());
}

#[tokio::test]
async fn test_undecodable_entry_is_a_miss() {
    let backend = MemoryStore::new();
    backend.put("status", json!("not an entry")).await.unwrap();

    let cache = PersistentCache::new(backend);
    assert!(cache.get("status").await.is_none());
}

#[test]
fn test_entry_freshness_boundary() {
    let now = Utc::now();
    let ttl = Duration::from_secs(600);

    let exactly = CacheEntry::new(json!(null), now - TimeDelta::seconds(600));
    assert!(exactly.is_fresh(ttl, now));

    let older = CacheEntry::new(json!(null), now - TimeDelta::seconds(601));
    assert!(!older.is_fresh(ttl, now));

    let future = CacheEntry::new(json!(null), now + TimeDelta::seconds(30));
    assert_eq!(future.age(now), Duration::ZERO);
    assert!(future.is_fresh(ttl, now));
}

#[test]
fn test_hit_rate() {
    let stats = CacheStats::new();
    assert_eq!(stats.hit_rate(), None);

    stats.record_miss();
    assert_eq!(stats.hit_rate(), Some(0.0));

    let shared = stats.clone();
    shared.record_hit();
    assert_eq!(stats.hits(), 1);
    assert_eq!(stats.misses(), 1);
    assert_eq!(stats.hit_rate(), Some(0.5));

    let snapshot = stats.snapshot();
    assert_eq!(snapshot.hits, 1);
    assert_eq!(snapshot.hit_rate, Some(0.5));
}

#[test]
fn test_parse_ttl_units() {
    let day = Duration::from_secs(86_400);
    for unit in ["days", "day", "d"] {
        assert_eq!(parse_ttl("1", unit).unwrap(), day);
    }
    for unit in ["hours", "hour", "h"] {
        assert_eq!(parse_ttl("3", unit).unwrap(), Duration::from_secs(10_800));
    }
    for unit in ["minutes", "minute", "m"] {
        assert_eq!(parse_ttl("15", unit).unwrap(), Duration::from_secs(900));
    }
    for unit in ["seconds", "second", "s"] {
        assert_eq!(parse_ttl("42", unit).unwrap(), Duration::from_secs(42));
    }
    assert_eq!(parse_ttl("0", "h").unwrap(), Duration::ZERO);
}

#[test]
fn test_parse_ttl_rejects_bad_input() {
    assert!(parse_ttl("-1", "days").is_err());
    assert!(parse_ttl("1.5", "hours").is_err());
    assert!(parse_ttl("1", "weeks").is_err());
    assert!(parse_ttl("1", "").is_err());
    assert!(parse_ttl(&u64::MAX.to_string(), "days").is_err());
}

#[test]
fn test_parse_ttl_names_the_bad_setting() {
    let setting = |amount: &str, unit: &str| match parse_ttl(amount, unit).unwrap_err().kind() {
        Blue1ErrorKind::Config(e) => e.setting.clone(),
        other => panic!("expected a configuration error, got {other:?}"),
    };

    assert_eq!(setting("two", "hours"), "expiration amount");
    assert_eq!(setting("2", "fortnights"), "expiration unit");
    assert_eq!(setting(&u64::MAX.to_string(), "days"), "expiration time");
}

#[test]
fn test_unit_display() {
    assert_eq!(TtlUnit::from_str("d").unwrap().to_string(), "days");
    assert_eq!(TtlUnit::Seconds.seconds(), 1);
}

#[tokio::test]
async fn test_ttl_fixed_is_shared_by_clones() {
    let ttl = CacheTtl::fixed(None);
    let handle = ttl.clone();
    assert_eq!(ttl.get().await, None);

    handle.set(Duration::from_secs(300)).await.unwrap();
    assert_eq!(ttl.get().await, Some(Duration::from_secs(300)));

    handle.clear().await.unwrap();
    assert_eq!(ttl.get().await, None);
}

#[tokio::test]
async fn test_ttl_load_default_when_unset() {
    let state: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let ttl = CacheTtl::load(state, Some(Duration::from_secs(3600))).await;
    assert_eq!(ttl.get().await, Some(Duration::from_secs(3600)));
}

#[tokio::test]
async fn test_ttl_persists_in_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("state.json");

    {
        let state: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path).await.unwrap());
        let ttl = CacheTtl::load(Arc::clone(&state), None).await;
        ttl.set(parse_ttl("2", "h").unwrap()).await.unwrap();
        assert_eq!(
            state.get(CACHE_EXPIRATION_KEY).await.unwrap(),
            Some(json!(7200))
        );
    }

    let state: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(&path).await.unwrap());
    let ttl = CacheTtl::load(state, None).await;
    assert_eq!(ttl.get().await, Some(Duration::from_secs(7200)));
}

#[tokio::test]
async fn test_cleared_ttl_overrides_default() {
    let state: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let default = Some(Duration::from_secs(60));

    let ttl = CacheTtl::load(Arc::clone(&state), default).await;
    ttl.clear().await.unwrap();

    let reloaded = CacheTtl::load(state, default).await;
    assert_eq!(reloaded.get().await, None);
}

#[tokio::test]
async fn test_malformed_stored_ttl_falls_back() {
    let state: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    state.put(CACHE_EXPIRATION_KEY, json!("a while")).await.unwrap();

    let ttl = CacheTtl::load(state, Some(Duration::from_secs(30))).await;
    assert_eq!(ttl.get().await, Some(Duration::from_secs(30)));
}
