//! Not implemented error types.

/// Not implemented error with source location.
///
/// Returned by the backend registry when a recognized medium name resolves to
/// an implementation that lives outside this workspace.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Not Implemented: {} at line {} in {}", message, line, file)]
pub struct NotImplementedError {
    /// Description of what is not implemented
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl NotImplementedError {
    /// Create a new NotImplementedError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use depot_error::NotImplementedError;
    ///
    /// let err = NotImplementedError::new("s3 backend is provided externally");
    /// assert!(err.message.contains("s3"));
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
