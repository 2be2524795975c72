//! Top-level error wrapper types.

use crate::{ConfigError, EnumerationError, NotFoundError, NotImplementedError, StreamError};

/// Discriminated union over every error concern in the depot workspace.
///
/// # Examples
///
/// ```
/// use depot_error::{ConfigError, DepotError};
///
/// let config_err = ConfigError::new("missing backend configuration");
/// let err: DepotError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, Clone, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum DepotErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Enumeration error
    #[from(EnumerationError)]
    Enumeration(EnumerationError),
    /// Asset not found
    #[from(NotFoundError)]
    NotFound(NotFoundError),
    /// Asset stream transfer error
    #[from(StreamError)]
    Stream(StreamError),
    /// Recognized medium implemented outside this workspace
    #[from(NotImplementedError)]
    NotImplemented(NotImplementedError),
}

/// Depot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use depot_error::{ConfigError, DepotResult};
///
/// fn might_fail() -> DepotResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Depot Error: {}", _0)]
pub struct DepotError(Box<DepotErrorKind>);

impl DepotError {
    /// Create a new error from a kind.
    pub fn new(kind: DepotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DepotErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to DepotErrorKind
impl<T> From<T> for DepotError
where
    T: Into<DepotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for depot operations.
///
/// # Examples
///
/// ```
/// use depot_error::{DepotResult, NotFoundError};
///
/// fn fetch_asset() -> DepotResult<Vec<u8>> {
///     Err(NotFoundError::new("asset deleted"))?
/// }
/// ```
pub type DepotResult<T> = std::result::Result<T, DepotError>;
