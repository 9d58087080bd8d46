//! Errors rendering command output as JSON.

/// `--format json` output could not be rendered.
///
/// Records reaching the printer have already been validated, so this only
/// fires when a serializer rejects a value outright.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Output Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Serializer message
    pub message: String,
    /// Line number where rendering failed
    pub line: u32,
    /// File where rendering failed
    pub file: &'static str,
}

impl JsonError {
    /// Record a rendering failure at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use blue1_error::JsonError;
    ///
    /// let err = JsonError::new("Failed to render rank history: key must be a string");
    /// assert!(err.message.contains("rank history"));
    /// assert!(err.to_string().starts_with("JSON Output Error"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
