//! Not found error types.

/// Not found error with source location.
///
/// An asset's locator no longer resolves to a readable resource at
/// stream-open time. The transport layer maps this to a client-visible
/// "not found" response rather than a transport crash.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Not Found: {} at line {} in {}", message, line, file)]
pub struct NotFoundError {
    /// Description of the missing resource
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl NotFoundError {
    /// Create a new NotFoundError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use depot_error::NotFoundError;
    ///
    /// let err = NotFoundError::new("/srv/releases/v1.0.0/app.nupkg");
    /// assert!(err.message.contains("app.nupkg"));
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
