//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, JsonError, RecordError, ReplayError, StorageError};

/// Every error condition the blue1 crates can surface.
///
/// # Examples
///
/// ```
/// use blue1_error::{Blue1Error, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: Blue1Error = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum Blue1ErrorKind {
    /// Upstream request failed (transport error or non-success status)
    #[from(HttpError)]
    Http(HttpError),
    /// Command output could not be rendered as JSON
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Durable storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// A raw API record was missing a field or had the wrong shape
    #[from(RecordError)]
    MalformedRecord(RecordError),
    /// Ranking replay was handed input it cannot fold
    #[from(ReplayError)]
    Replay(ReplayError),
}

/// blue1 error with kind discrimination.
///
/// # Examples
///
/// ```
/// use blue1_error::{Blue1Result, ConfigError};
///
/// fn might_fail() -> Blue1Result<()> {
///     Err(ConfigError::new("expiration unit", "Did not recognize 'fortnights'"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("blue1 Error: {}", _0)]
pub struct Blue1Error(Box<Blue1ErrorKind>);

impl Blue1Error {
    /// Create a new error from a kind.
    pub fn new(kind: Blue1ErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &Blue1ErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to Blue1ErrorKind
impl<T> From<T> for Blue1Error
where
    T: Into<Blue1ErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for blue1 operations.
pub type Blue1Result<T> = std::result::Result<T, Blue1Error>;
