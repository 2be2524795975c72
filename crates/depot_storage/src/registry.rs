//! Name-keyed resolution of storage mediums.

use crate::{Backend, DepotConfig, FilesystemBackend};
use depot_error::{ConfigError, DepotResult, NotImplementedError};
use std::str::FromStr;
use std::sync::Arc;

/// Storage mediums recognized by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum BackendKind {
    /// Local filesystem medium
    Filesystem,
    /// Object storage medium
    S3,
    /// Hosted source-control releases medium
    Github,
}

/// What to resolve: a medium name, or an already-constructed backend.
///
/// Passing an instance back through [`resolve`] is a no-op, so resolution is
/// idempotent and callers can hand either form down without inspecting it.
pub enum BackendSelector {
    /// A medium name to look up ("filesystem", "s3", "github")
    Name(String),
    /// An already-resolved backend, passed through unchanged
    Instance(Arc<dyn Backend>),
}

impl From<&str> for BackendSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for BackendSelector {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Arc<dyn Backend>> for BackendSelector {
    fn from(backend: Arc<dyn Backend>) -> Self {
        Self::Instance(backend)
    }
}

/// Resolve a storage medium to a backend instance.
///
/// Construction validates medium-specific configuration eagerly, so a
/// successfully resolved backend is ready to enumerate.
///
/// # Errors
///
/// - Configuration error for an unrecognized medium name or missing
///   medium-specific settings
/// - Not-implemented error for the s3 and github mediums, whose
///   implementations live in external crates satisfying the same [`Backend`]
///   contract
pub fn resolve(
    selector: impl Into<BackendSelector>,
    config: &DepotConfig,
) -> DepotResult<Arc<dyn Backend>> {
    match selector.into() {
        BackendSelector::Instance(backend) => Ok(backend),
        BackendSelector::Name(name) => {
            let kind = BackendKind::from_str(&name)
                .map_err(|_| ConfigError::new(format!("Unknown storage backend: {}", name)))?;

            tracing::debug!(%kind, "Resolving storage backend");
            match kind {
                BackendKind::Filesystem => {
                    let backend: Arc<dyn Backend> =
                        Arc::new(FilesystemBackend::from_config(config)?);
                    Ok(backend)
                }
                BackendKind::S3 => {
                    Err(NotImplementedError::new("s3 backend is provided by an external crate")
                        .into())
                }
                BackendKind::Github => Err(NotImplementedError::new(
                    "github backend is provided by an external crate",
                )
                .into()),
            }
        }
    }
}
