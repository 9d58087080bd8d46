//! Persistent TTL cache for blue1.
//!
//! Responses from The Blue Alliance are cached by request path together
//! with the time they were fetched. Entries are never evicted by size; an
//! entry older than the current expiration time ([`CacheTtl`]) is simply
//! refetched and overwritten.
//!
//! - [`CacheStore`] / [`PersistentCache`]: keyed entry storage over any
//!   [`blue1_storage::KeyValueStore`]
//! - [`CacheStats`]: hit and miss counters owned by each client
//! - [`CacheTtl`]: the shared expiration setting and its operator parser

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entry;
mod stats;
mod store;
mod ttl;

pub use entry::CacheEntry;
pub use stats::{CacheStats, CacheStatsSnapshot};
pub use store::{CacheStore, PersistentCache};
pub use ttl::{parse_ttl, CacheTtl, TtlUnit, CACHE_EXPIRATION_KEY};
