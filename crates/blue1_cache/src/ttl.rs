//! The process-wide cache expiration setting.

use blue1_error::{Blue1Result, ConfigError};
use blue1_storage::KeyValueStore;
use serde_json::Value as JsonValue;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// State key holding the expiration time in seconds.
pub const CACHE_EXPIRATION_KEY: &str = "cache_expiration_time";

/// Unit accepted when setting the expiration time.
///
/// ```
/// use blue1_cache::TtlUnit;
/// use std::str::FromStr;
///
/// assert_eq!(TtlUnit::from_str("h").unwrap(), TtlUnit::Hours);
/// assert_eq!(TtlUnit::from_str("minute").unwrap(), TtlUnit::Minutes);
/// assert!(TtlUnit::from_str("weeks").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
)]
pub enum TtlUnit {
    /// `days`, `day`, `d`
    #[strum(to_string = "days", serialize = "day", serialize = "d")]
    Days,
    /// `hours`, `hour`, `h`
    #[strum(to_string = "hours", serialize = "hour", serialize = "h")]
    Hours,
    /// `minutes`, `minute`, `m`
    #[strum(to_string = "minutes", serialize = "minute", serialize = "m")]
    Minutes,
    /// `seconds`, `second`, `s`
    #[strum(to_string = "seconds", serialize = "second", serialize = "s")]
    Seconds,
}

impl TtlUnit {
    /// Length of one unit in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            TtlUnit::Days => 24 * 60 * 60,
            TtlUnit::Hours => 60 * 60,
            TtlUnit::Minutes => 60,
            TtlUnit::Seconds => 1,
        }
    }
}

/// Parse an operator supplied `<amount> <unit>` pair.
///
/// ```
/// use blue1_cache::parse_ttl;
/// use std::time::Duration;
///
/// assert_eq!(parse_ttl("2", "days").unwrap(), Duration::from_secs(172_800));
/// assert_eq!(parse_ttl("90", "s").unwrap(), Duration::from_secs(90));
/// assert!(parse_ttl("two", "days").is_err());
/// assert!(parse_ttl("2", "fortnights").is_err());
/// ```
///
/// # Errors
///
/// Returns a configuration error for a non-numeric amount, an unknown unit,
/// or a duration too large to represent in seconds.
#[track_caller]
pub fn parse_ttl(amount: &str, unit: &str) -> Blue1Result<Duration> {
    let amount: u64 = amount.trim().parse().map_err(|e| {
        ConfigError::new("expiration amount", format!("'{amount}' is not a whole number: {e}"))
    })?;
    let unit = TtlUnit::from_str(unit.trim()).map_err(|_| {
        ConfigError::new(
            "expiration unit",
            format!(
                "Did not recognize '{unit}'; expected days, hours, minutes or seconds \
                 (or a singular or single letter abbreviation)"
            ),
        )
    })?;
    let seconds = amount
        .checked_mul(unit.seconds())
        .ok_or_else(|| ConfigError::new("expiration time", format!("{amount} {unit} is too long")))?;
    Ok(Duration::from_secs(seconds))
}

/// Shared, mutable cache expiration time.
///
/// `None` disables caching. Clones share the same setting, so a change made
/// through an operator command is seen by every client holding a clone.
///
/// When backed by a state store the setting persists under
/// [`CACHE_EXPIRATION_KEY`]: a number of seconds, or `null` once an operator
/// has cleared it. A missing key falls back to the configured default.
#[derive(Clone)]
pub struct CacheTtl {
    current: Arc<RwLock<Option<Duration>>>,
    state: Option<Arc<dyn KeyValueStore>>,
}

impl std::fmt::Debug for CacheTtl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheTtl")
            .field("persistent", &self.state.is_some())
            .finish_non_exhaustive()
    }
}

impl CacheTtl {
    /// A setting that lives only in memory.
    pub fn fixed(ttl: Option<Duration>) -> Self {
        Self {
            current: Arc::new(RwLock::new(ttl)),
            state: None,
        }
    }

    /// Load the setting from `state`, falling back to `default` when the
    /// key was never written.
    ///
    /// An unreadable or malformed stored value is logged and treated as
    /// missing.
    #[tracing::instrument(skip(state))]
    pub async fn load(state: Arc<dyn KeyValueStore>, default: Option<Duration>) -> Self {
        let ttl = match state.get(CACHE_EXPIRATION_KEY).await {
            Ok(None) => default,
            Ok(Some(JsonValue::Null)) => None,
            Ok(Some(JsonValue::Number(n))) if n.as_u64().is_some() => {
                n.as_u64().map(Duration::from_secs)
            }
            Ok(Some(other)) => {
                tracing::warn!(value = %other, "Ignoring malformed stored expiration time");
                default
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored expiration time");
                default
            }
        };

        tracing::info!(ttl_seconds = ?ttl.map(|t| t.as_secs()), "Loaded cache expiration time");
        Self {
            current: Arc::new(RwLock::new(ttl)),
            state: Some(state),
        }
    }

    /// The current expiration time, `None` when caching is disabled.
    pub async fn get(&self) -> Option<Duration> {
        *self.current.read().await
    }

    /// Set the expiration time, persisting it first when backed by a store.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the new value cannot be persisted; the
    /// in-memory setting is left unchanged in that case.
    #[tracing::instrument(skip(self), fields(seconds = ttl.as_secs()))]
    pub async fn set(&self, ttl: Duration) -> Blue1Result<()> {
        self.store(JsonValue::from(ttl.as_secs())).await?;
        *self.current.write().await = Some(ttl);
        tracing::info!("Cache expiration time updated");
        Ok(())
    }

    /// Disable caching.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the change cannot be persisted.
    #[tracing::instrument(skip(self))]
    pub async fn clear(&self) -> Blue1Result<()> {
        self.store(JsonValue::Null).await?;
        *self.current.write().await = None;
        tracing::info!("Cache expiration time cleared, caching disabled");
        Ok(())
    }

    async fn store(&self, value: JsonValue) -> Blue1Result<()> {
        match &self.state {
            Some(state) => state.put(CACHE_EXPIRATION_KEY, value).await,
            None => Ok(()),
        }
    }
}
