//! The Blue Alliance API v3 client for blue1.
//!
//! [`TbaClient`] wraps an [`Upstream`] (normally [`HttpUpstream`]) with the
//! persistent cache from `blue1_cache` and turns payloads into validated
//! `blue1_core` entities.
//!
//! # Example
//!
//! ```no_run
//! use blue1_tba::{Blue1Config, TbaClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Blue1Config::load()?;
//! let client = TbaClient::from_config(&config).await?;
//!
//! if let Some(matches) = client.get_event_matches("2023cabl").await {
//!     for m in &matches {
//!         println!("{m}");
//!     }
//! }
//! println!("hit rate: {:?}", client.stats().hit_rate());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
pub mod paths;
mod upstream;

pub use client::TbaClient;
pub use config::{Blue1Config, CacheConfig, StateConfig, TbaConfig};
pub use upstream::{HttpUpstream, Upstream, AUTH_HEADER};
