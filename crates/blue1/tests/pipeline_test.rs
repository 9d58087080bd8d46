//! End to end tests through the facade: scripted upstream, cache, analysis.

use blue1::{
    init_logging, paths, replay_event, HttpError, LogConfig, MemoryStore, PersistentCache,
    RankWatcher, TbaClient, Upstream, CacheTtl,
};
use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const EVENT: &str = "2023test";

#[derive(Default)]
struct ScriptedUpstream {
    responses: Mutex<HashMap<String, JsonValue>>,
    calls: AtomicUsize,
}

impl ScriptedUpstream {
    fn set(&self, path: impl Into<String>, payload: JsonValue) {
        self.responses.lock().unwrap().insert(path.into(), payload);
    }
}

#[async_trait::async_trait]
impl Upstream for ScriptedUpstream {
    async fn fetch(&self, path: &str) -> Result<JsonValue, HttpError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| HttpError::with_status(404, path))
    }
}

fn keys(teams: [u32; 3]) -> [String; 3] {
    teams.map(|t| format!("frc{t}"))
}

fn qual(number: u32, red: [u32; 3], red_rp: u32, blue: [u32; 3], blue_rp: u32) -> JsonValue {
    json!({
        "key": format!("{EVENT}_qm{number}"),
        "event_key": EVENT,
        "comp_level": "qm",
        "set_number": 1,
        "match_number": number,
        "alliances": {
            "red": { "team_keys": keys(red), "score": 50 },
            "blue": { "team_keys": keys(blue), "score": 40 }
        },
        "winning_alliance": "red",
        "score_breakdown": { "red": { "rp": red_rp }, "blue": { "rp": blue_rp } }
    })
}

fn scripted_event() -> ScriptedUpstream {
    let upstream = ScriptedUpstream::default();
    let teams: Vec<JsonValue> = (1..=8)
        .rev()
        .map(|n| json!({ "key": format!("frc{n}"), "team_number": n }))
        .collect();
    upstream.set(paths::event_teams(EVENT), JsonValue::Array(teams));
    // Provider order is not play order
    upstream.set(
        paths::event_matches(EVENT),
        json!([
            qual(5, [6, 7, 1], 1, [2, 3, 4], 1),
            qual(3, [1, 5, 7], 0, [3, 6, 8], 4),
            qual(1, [1, 2, 3], 2, [4, 5, 6], 0),
            qual(4, [1, 2, 4], 4, [3, 5, 8], 0),
            qual(2, [4, 7, 8], 3, [2, 5, 6], 1),
        ]),
    );
    upstream
}

fn make_client(upstream: Arc<ScriptedUpstream>) -> TbaClient {
    let cache = Arc::new(PersistentCache::new(MemoryStore::new()));
    TbaClient::new(upstream, cache, CacheTtl::fixed(Some(Duration::from_secs(3600))))
}

#[tokio::test]
async fn test_rank_history_through_cache() {
    let upstream = Arc::new(scripted_event());
    let client = make_client(upstream.clone());

    for _ in 0..2 {
        let teams = client.get_event_teams(EVENT).await.unwrap();
        let matches = client.get_event_matches(EVENT).await.unwrap();
        assert_eq!(teams, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let trajectory = replay_event(&teams, &matches, 1).unwrap();
        assert_eq!(trajectory.ranks(), &vec![1, 3, 7, 4, 4]);
        assert_eq!(trajectory.rp_averages(), &vec![2.0, 2.0, 1.0, 2.0, 1.75]);
    }

    assert_eq!(upstream.calls.load(Ordering::SeqCst), 2);
    assert_eq!(client.stats().hits(), 2);
    assert_eq!(client.stats().misses(), 2);
}

#[tokio::test]
async fn test_watcher_over_polled_rankings() {
    let upstream = Arc::new(ScriptedUpstream::default());
    let path = paths::event_rankings(EVENT);
    upstream.set(
        path.clone(),
        json!({ "rankings": [
            { "rank": 1, "team_key": "frc254" },
            { "rank": 2, "team_key": "frc7042" }
        ] }),
    );
    // Every poll goes live
    let cache = Arc::new(PersistentCache::new(MemoryStore::new()));
    let client = TbaClient::new(upstream.clone(), cache, CacheTtl::fixed(None));
    let mut watcher = RankWatcher::new(Some(7042));

    let first = client.get_event_rankings(EVENT).await.unwrap();
    assert!(watcher.observe(&first).is_some());

    let unchanged = client.get_event_rankings(EVENT).await.unwrap();
    assert!(watcher.observe(&unchanged).is_none());

    upstream.set(
        path,
        json!({ "rankings": [
            { "rank": 1, "team_key": "frc7042" },
            { "rank": 2, "team_key": "frc254" }
        ] }),
    );
    let moved = client.get_event_rankings(EVENT).await.unwrap();
    let change = watcher.observe(&moved).unwrap();
    assert_eq!(*change.current_rank(), Some(1));
    assert_eq!(client.stats().hits() + client.stats().misses(), 0);
}

#[test]
fn test_logging_installs_once() -> Result<(), Box<dyn std::error::Error>> {
    // Same conversion the binary's main relies on
    init_logging(&LogConfig::default())?;
    assert!(init_logging(&LogConfig::default()).is_err());
    Ok(())
}
