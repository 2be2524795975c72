//! Configuration error types.

/// Configuration error with source location.
///
/// Raised synchronously while constructing a backend: a required option is
/// missing, or the referenced base location does not exist. Fatal — the
/// backend instance is never handed to the caller.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use depot_error::ConfigError;
    ///
    /// let err = ConfigError::new("filesystem backend requires `backends.filesystem.path`");
    /// assert!(err.message.contains("backends.filesystem.path"));
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
