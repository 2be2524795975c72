//! Enumeration error types.

/// Kinds of enumeration errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum EnumerationErrorKind {
    /// Failed to list a directory or prefix
    #[display("Failed to list directory: {}", _0)]
    ListDir(String),
    /// Failed to resolve metadata for a listed entry
    #[display("Failed to resolve entry metadata: {}", _0)]
    EntryMetadata(String),
}

/// Enumeration error with location tracking.
///
/// Any failure while listing a directory level or resolving one entry's
/// metadata fails the whole enumeration. A catalog build never surfaces
/// partial results: a catalog with silently missing releases is worse than a
/// hard failure.
///
/// # Examples
///
/// ```
/// use depot_error::{EnumerationError, EnumerationErrorKind};
///
/// let err = EnumerationError::new(EnumerationErrorKind::ListDir(
///     "/srv/releases: permission denied".to_string(),
/// ));
/// assert!(format!("{}", err).contains("list directory"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Enumeration Error: {} at line {} in {}", kind, line, file)]
pub struct EnumerationError {
    /// The kind of error that occurred
    pub kind: EnumerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl EnumerationError {
    /// Create a new enumeration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EnumerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
