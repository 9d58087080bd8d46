//! blue1: a cached client for The Blue Alliance with FRC ranking replay.
//!
//! The workspace is split into focused crates, all re-exported here:
//!
//! - `blue1_error` - Error types
//! - `blue1_core` - Teams, events, matches and match ordering
//! - `blue1_storage` - Durable key-value stores
//! - `blue1_cache` - Timestamped response cache, expiration and counters
//! - `blue1_tba` - Configuration and the caching API client
//! - `blue1_analysis` - Ranking replay, assessments, timelines, rank watching
//!
//! # Example
//!
//! ```no_run
//! use blue1::{replay_event, Blue1Config, TbaClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TbaClient::from_config(&Blue1Config::load()?).await?;
//!
//! let teams = client.get_event_teams("2023cabl").await.unwrap_or_default();
//! let matches = client.get_event_matches("2023cabl").await.unwrap_or_default();
//! let trajectory = replay_event(&teams, &matches, 7042)?;
//! println!("{:?}", trajectory.ranks());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod logging;

pub use blue1_analysis::*;
pub use blue1_cache::*;
pub use blue1_core::*;
pub use blue1_error::*;
pub use blue1_storage::*;
pub use blue1_tba::*;

pub use logging::{init_logging, LogConfig, LogFormat};
