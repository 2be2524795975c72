//! Stream error types.

/// Stream error with source location.
///
/// A byte-transfer failure while serving an already-opened asset stream.
/// Local to one asset; never invalidates the cached catalog.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Stream Error: {} at line {} in {}", message, line, file)]
pub struct StreamError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StreamError {
    /// Create a new StreamError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use depot_error::StreamError;
    ///
    /// let err = StreamError::new("connection reset while piping asset");
    /// assert!(err.message.contains("connection reset"));
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
