//! Malformed API record errors.

/// Ways a raw API record can fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RecordErrorKind {
    /// Record did not deserialize into the expected shape
    #[display("{} record has the wrong shape: {}", entity, reason)]
    Shape {
        /// Entity being built ("team", "event", "match")
        entity: &'static str,
        /// Deserializer message
        reason: String,
    },

    /// A field was present but its value is not acceptable
    #[display("{} record has invalid '{}': {}", entity, field, reason)]
    InvalidField {
        /// Entity being built
        entity: &'static str,
        /// Field name
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Malformed record error with location tracking.
///
/// # Examples
///
/// ```
/// use blue1_error::{RecordError, RecordErrorKind};
///
/// let err = RecordError::invalid("team", "key", "expected 'frc<number>', got '254'");
/// assert!(matches!(err.kind(), RecordErrorKind::InvalidField { .. }));
/// assert!(format!("{}", err).contains("team record has invalid 'key'"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Malformed Record: {} at line {} in {}", kind, line, file)]
pub struct RecordError {
    kind: RecordErrorKind,
    line: u32,
    file: &'static str,
}

impl RecordError {
    /// Create a new record error with caller location tracking.
    #[track_caller]
    pub fn new(kind: RecordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`RecordErrorKind::InvalidField`].
    #[track_caller]
    pub fn invalid(entity: &'static str, field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(RecordErrorKind::InvalidField {
            entity,
            field: field.into(),
            reason: reason.into(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RecordErrorKind {
        &self.kind
    }
}
