//! Errors in settings: config files, environment and operator input.

/// A setting could not be read or was rejected.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error in {}: {} at line {} in {}", setting, message, line, file)]
pub struct ConfigError {
    /// The config file, environment variable or argument at fault
    pub setting: String,
    /// What was wrong with it
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Reject `setting` with `message`, recording the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use blue1_error::ConfigError;
    ///
    /// let err = ConfigError::new("BLUE1_TBA_API_TOKEN", "not set");
    /// assert_eq!(err.setting, "BLUE1_TBA_API_TOKEN");
    /// assert!(err.to_string().contains("Configuration Error in BLUE1_TBA_API_TOKEN: not set"));
    /// ```
    #[track_caller]
    pub fn new(setting: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            setting: setting.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
