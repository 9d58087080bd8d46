//! Error types for blue1.
//!
//! This crate provides the foundation error types used throughout the blue1 workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use blue1_error::{Blue1Result, HttpError};
//!
//! fn fetch_data() -> Blue1Result<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod record;
mod replay;
mod storage;

pub use config::ConfigError;
pub use error::{Blue1Error, Blue1ErrorKind, Blue1Result};
pub use http::HttpError;
pub use json::JsonError;
pub use record::{RecordError, RecordErrorKind};
pub use replay::{ReplayError, ReplayErrorKind};
pub use storage::{StorageError, StorageErrorKind};
