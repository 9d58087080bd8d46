//! The caching API client.

use crate::{paths, Blue1Config, HttpUpstream, Upstream};
use blue1_cache::{CacheStats, CacheStore, CacheTtl, PersistentCache};
use blue1_core::{sorted_matches, Event, EventRanking, Match, Team};
use blue1_error::Blue1Result;
use blue1_storage::{JsonFileStore, KeyValueStore};
use chrono::Utc;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::instrument;

/// Client for The Blue Alliance with a fetch-through cache.
///
/// Every request is keyed by its path. While an expiration time is set,
/// a fresh cached response is returned without a live call (a hit) and a
/// missing or stale one is fetched, stored and returned (a miss). With no
/// expiration time the cache is bypassed and nothing is counted.
///
/// Failures never surface as errors: an unreachable provider, a non-success
/// status or a payload that fails validation is logged and returned as
/// `None`, the same as a record that does not exist.
///
/// Simultaneous misses on the same path each fetch; the last store wins.
#[derive(Clone)]
pub struct TbaClient {
    upstream: Arc<dyn Upstream>,
    cache: Arc<dyn CacheStore>,
    ttl: CacheTtl,
    stats: CacheStats,
}

impl std::fmt::Debug for TbaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TbaClient")
            .field("ttl", &self.ttl)
            .field("stats", &self.stats.snapshot())
            .finish_non_exhaustive()
    }
}

impl TbaClient {
    /// Create a client with fresh counters.
    pub fn new(upstream: Arc<dyn Upstream>, cache: Arc<dyn CacheStore>, ttl: CacheTtl) -> Self {
        Self {
            upstream,
            cache,
            ttl,
            stats: CacheStats::new(),
        }
    }

    /// Build a client from configuration: HTTP upstream, file-backed cache
    /// and the persisted expiration time.
    ///
    /// # Errors
    ///
    /// Returns an error if the API token is missing or a store file exists
    /// but cannot be loaded.
    #[instrument(skip(config))]
    pub async fn from_config(config: &Blue1Config) -> Blue1Result<Self> {
        let mut upstream = HttpUpstream::new(config.tba().base_url().clone(), config.token()?);
        if let Some(rpm) = config.tba().requests_per_minute() {
            upstream = upstream.with_requests_per_minute(*rpm);
        }

        let cache = PersistentCache::new(JsonFileStore::open(config.cache_path()).await?);
        let state: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::open(config.state_path()).await?);
        let ttl = CacheTtl::load(state, config.default_ttl()).await;

        Ok(Self::new(Arc::new(upstream), Arc::new(cache), ttl))
    }

    /// Hit and miss counters of this client.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// The expiration setting this client reads.
    pub fn ttl(&self) -> &CacheTtl {
        &self.ttl
    }

    /// Number of cached responses.
    pub async fn cached_entries(&self) -> usize {
        self.cache.len().await
    }

    /// Fetch `path` through the cache.
    #[instrument(skip(self))]
    pub async fn request(&self, path: &str) -> Option<JsonValue> {
        let Some(ttl) = self.ttl.get().await else {
            tracing::debug!("Caching disabled, fetching live");
            return self.fetch_live(path).await;
        };

        match self.cache.get(path).await {
            Some(entry) if entry.is_fresh(ttl, Utc::now()) => {
                self.stats.record_hit();
                tracing::debug!("Cache hit");
                return Some(entry.into_payload());
            }
            Some(entry) => {
                tracing::debug!(age_seconds = entry.age(Utc::now()).as_secs(), "Cache entry stale");
            }
            None => tracing::debug!("Cache miss"),
        }

        self.stats.record_miss();
        let payload = self.fetch_live(path).await?;
        self.cache.put(path, payload.clone()).await;
        Some(payload)
    }

    async fn fetch_live(&self, path: &str) -> Option<JsonValue> {
        match self.upstream.fetch(path).await {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!(path, status = ?e.status, error = %e, "Upstream request failed");
                None
            }
        }
    }

    /// Whether the provider answers its status endpoint. Never cached.
    #[instrument(skip(self))]
    pub async fn api_is_up(&self) -> bool {
        self.fetch_live(paths::STATUS).await.is_some()
    }

    /// A team by number.
    pub async fn get_team(&self, team: u32) -> Option<Team> {
        let payload = self.request(&paths::team(team)).await?;
        parsed(Team::from_json(&payload), "team")
    }

    /// An event by key, e.g. `2023cabl`.
    pub async fn get_event(&self, event: &str) -> Option<Event> {
        let payload = self.request(&paths::event(event)).await?;
        parsed(Event::from_json(&payload), "event")
    }

    /// A match by key, e.g. `2023cabl_qm1`.
    pub async fn get_match(&self, match_key: &str) -> Option<Match> {
        let payload = self.request(&paths::match_detail(match_key)).await?;
        parsed(Match::from_json(&payload), "match")
    }

    /// Every match at an event, in play order.
    pub async fn get_event_matches(&self, event: &str) -> Option<Vec<Match>> {
        let payload = self.request(&paths::event_matches(event)).await?;
        match_list(&payload)
    }

    /// A team's matches at an event, in play order.
    pub async fn get_team_event_matches(&self, team: u32, event: &str) -> Option<Vec<Match>> {
        let payload = self.request(&paths::team_event_matches(team, event)).await?;
        match_list(&payload)
    }

    /// A team's matches across a season, in play order per event.
    pub async fn get_team_matches(&self, team: u32, year: i32) -> Option<Vec<Match>> {
        let payload = self.request(&paths::team_matches(team, year)).await?;
        match_list(&payload)
    }

    /// Numbers of the teams registered for an event, ascending.
    pub async fn get_event_teams(&self, event: &str) -> Option<Vec<u32>> {
        let payload = self.request(&paths::event_teams(event)).await?;
        let mut teams = records(&payload, "team list")?
            .iter()
            .map(|record| Team::from_json(record).map(|team| *team.number()))
            .collect::<Blue1Result<Vec<u32>>>();
        if let Ok(teams) = &mut teams {
            teams.sort_unstable();
        }
        parsed(teams, "team list")
    }

    /// Official rankings of an event, best first.
    pub async fn get_event_rankings(&self, event: &str) -> Option<Vec<EventRanking>> {
        let payload = self.request(&paths::event_rankings(event)).await?;
        parsed(EventRanking::list_from_json(&payload), "rankings")
    }

    /// A team's status at an event, as the provider reports it.
    pub async fn get_team_event_status(&self, team: u32, event: &str) -> Option<JsonValue> {
        self.request(&paths::team_event_status(team, event)).await
    }

    /// A team's status at each event of a season, as the provider reports it.
    pub async fn get_team_events_statuses(&self, team: u32, year: i32) -> Option<JsonValue> {
        self.request(&paths::team_events_statuses(team, year)).await
    }
}

/// Log and drop a validation failure.
fn parsed<T>(result: Blue1Result<T>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "Discarding malformed {}", what);
            None
        }
    }
}

fn records<'a>(payload: &'a JsonValue, what: &str) -> Option<&'a Vec<JsonValue>> {
    let list = payload.as_array();
    if list.is_none() {
        tracing::warn!("Expected a JSON array for {}", what);
    }
    list
}

fn match_list(payload: &JsonValue) -> Option<Vec<Match>> {
    let matches = records(payload, "match list")?
        .iter()
        .map(Match::from_json)
        .collect::<Blue1Result<Vec<_>>>();
    parsed(matches, "match list").map(sorted_matches)
}
