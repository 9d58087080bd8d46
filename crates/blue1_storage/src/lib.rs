//! Durable key-value storage for blue1.
//!
//! The cache and the operator state both persist as a single JSON object
//! mapping string keys to JSON values. This crate provides the storage
//! abstraction and its backends:
//!
//! - [`JsonFileStore`]: loads the whole document at open, serves reads from
//!   memory and publishes every write with a temp file, `sync_all` and an
//!   atomic rename
//! - [`MemoryStore`]: process-local map, for tests and cache-less runs
//!
//! # Example
//!
//! ```rust
//! use blue1_storage::{JsonFileStore, KeyValueStore};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonFileStore::open("/tmp/blue1-doc/state.json").await?;
//! store.put("cache_expiration_time", json!(3600)).await?;
//!
//! let reopened = JsonFileStore::open("/tmp/blue1-doc/state.json").await?;
//! assert_eq!(reopened.get("cache_expiration_time").await?, Some(json!(3600)));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json_file;
mod memory;
mod store;

pub use blue1_error::{StorageError, StorageErrorKind};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
