//! The upstream provider.

use blue1_error::HttpError;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use serde_json::Value as JsonValue;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::instrument;

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Header carrying the API token.
pub const AUTH_HEADER: &str = "X-TBA-Auth-Key";

/// A stateless source of API responses.
///
/// `fetch` either yields the JSON body of a successful response or an
/// [`HttpError`] for transport failures and non-success statuses
/// (including 404). Implementations do not retry.
#[async_trait::async_trait]
pub trait Upstream: Send + Sync {
    /// Fetch `path`, relative to the API root.
    async fn fetch(&self, path: &str) -> Result<JsonValue, HttpError>;
}

/// [`Upstream`] over HTTPS with reqwest.
#[derive(Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
    token: String,
    limiter: Option<Arc<DirectRateLimiter>>,
}

impl std::fmt::Debug for HttpUpstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpUpstream")
            .field("base_url", &self.base_url)
            .field("throttled", &self.limiter.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpUpstream {
    /// Create an unthrottled upstream.
    #[instrument(skip_all)]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        tracing::debug!(%base_url, "Creating HTTP upstream");
        Self {
            client: reqwest::Client::new(),
            base_url,
            token: token.into(),
            limiter: None,
        }
    }

    /// Limit live requests to `rpm` per minute. Zero disables the limit.
    pub fn with_requests_per_minute(mut self, rpm: u32) -> Self {
        self.limiter = NonZeroU32::new(rpm)
            .map(|n| Arc::new(GovernorRateLimiter::direct(Quota::per_minute(n))));
        self
    }

    /// Root every path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Join the API root and a relative path with exactly one `/`.
fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[async_trait::async_trait]
impl Upstream for HttpUpstream {
    #[instrument(skip(self))]
    async fn fetch(&self, path: &str) -> Result<JsonValue, HttpError> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }

        let url = join_url(&self.base_url, path);
        tracing::debug!(%url, "Sending request");

        let response = self
            .client
            .get(&url)
            .header(AUTH_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                HttpError::new(format!("Request for {path} failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Provider returned error: {}", status);
            return Err(HttpError::with_status(
                status.as_u16(),
                format!("{path} returned {status}"),
            ));
        }

        let body = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            HttpError::new(format!("Failed to parse response for {path}: {e}"))
        })?;

        tracing::info!("Fetched live response");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://www.thebluealliance.com/api/v3/", "status"),
            "https://www.thebluealliance.com/api/v3/status"
        );
        assert_eq!(
            join_url("https://www.thebluealliance.com/api/v3", "/team/frc254"),
            "https://www.thebluealliance.com/api/v3/team/frc254"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let upstream = HttpUpstream::new("https://example.invalid/", "secret-token")
            .with_requests_per_minute(30);
        let shown = format!("{upstream:?}");
        assert!(!shown.contains("secret-token"));
        assert!(shown.contains("throttled: true"));
    }
}
