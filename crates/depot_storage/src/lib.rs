//! Pluggable release-catalog storage backends for depot.
//!
//! This crate defines the contract every storage medium must satisfy to serve
//! versioned release artifacts (installer packages, delta patches, metadata
//! manifests), and implements it for the local filesystem. A medium is
//! enumerated into a canonical [`Catalog`] of [`Release`] entries grouped by
//! version tag; individual [`Asset`] bytes are streamed on demand.
//!
//! # Features
//!
//! - **Pluggable backends**: Trait-based abstraction over filesystem, object
//!   storage, and hosted source-control releases, resolved by name through
//!   the [`registry`](resolve)
//! - **Memoized catalogs**: The expensive two-level enumeration runs at most
//!   once per backend instance; concurrent callers share one build
//! - **All-or-nothing enumeration**: A catalog with silently missing releases
//!   is never surfaced — any listing failure fails the whole build
//!
//! # Example
//!
//! ```rust
//! use depot_storage::{Backend, FilesystemBackend};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = FilesystemBackend::new("/srv/depot/releases")?;
//!
//! // Enumerate the catalog (memoized after the first call)
//! let catalog = backend.releases().await?;
//! for release in catalog.releases() {
//!     println!("{} ({} assets)", release.tag_name, release.assets.len());
//! }
//!
//! // Stream one asset to a transport
//! if let Some(asset) = catalog.releases().first().and_then(|r| r.assets.first()) {
//!     let mut sink = Vec::new();
//!     backend.serve_asset(asset, &mut sink).await?;
//! }
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::pin::Pin;
use tokio::io::{AsyncRead, AsyncWrite};

mod cache;
mod config;
mod enumerate;
mod filesystem;
mod registry;

pub use cache::CatalogCache;
pub use config::{BackendsConfig, DepotConfig, FilesystemConfig, GithubConfig, S3Config};
pub use depot_error::{DepotError, DepotErrorKind, DepotResult};
pub use enumerate::{StorageEntry, list_entries};
pub use filesystem::FilesystemBackend;
pub use registry::{BackendKind, BackendSelector, resolve};

use depot_error::StreamError;

/// A lazy, finite, single-pass byte source for one asset.
pub type AssetStream = Pin<Box<dyn AsyncRead + Send>>;

/// Trait for pluggable release-catalog storage backends.
///
/// Implementations turn one physical storage medium (a directory tree, an
/// object-storage bucket, a hosted-release API) into the canonical release
/// catalog, and open byte streams for individual assets. The surrounding
/// service stays medium-agnostic by resolving an implementation once at
/// startup through [`resolve`].
///
/// Construction is where medium-specific configuration is validated: a
/// backend must fail fast with a configuration error when a required option
/// is absent or the referenced base location does not exist, rather than
/// deferring the failure to first use.
#[async_trait::async_trait]
pub trait Backend: std::fmt::Debug + Send + Sync {
    /// Enumerate the medium and return the current release catalog.
    ///
    /// Safe to call repeatedly. Enumeration can be I/O-expensive (a paginated
    /// remote listing, a two-level directory walk), so implementations
    /// memoize: repeated calls return the snapshot built on first use.
    async fn releases(&self) -> DepotResult<Catalog>;

    /// Open a readable, sequential, single-consumption byte source for one
    /// cataloged asset.
    ///
    /// Never buffers the whole asset in memory. Fails with a not-found error
    /// when the asset no longer exists at its locator.
    async fn get_asset_stream(&self, asset: &Asset) -> DepotResult<AssetStream>;

    /// Transmit an asset's bytes to a response transport.
    ///
    /// The default implementation resolves [`Backend::get_asset_stream`] and
    /// pipes it into `response`, returning the number of bytes written. A
    /// stream-open not-found failure propagates untouched so the transport
    /// layer can translate it into a "not found" response; transfer failures
    /// surface as stream errors. A medium-specific override may instead
    /// redirect the transport to a medium-native URL (for instance a
    /// pre-signed object-storage link) rather than proxying bytes.
    async fn serve_asset(
        &self,
        asset: &Asset,
        response: &mut (dyn AsyncWrite + Send + Unpin),
    ) -> DepotResult<u64> {
        let mut stream = self.get_asset_stream(asset).await?;
        let written = tokio::io::copy(&mut stream, response)
            .await
            .map_err(|e| StreamError::new(format!("{}: {}", asset.name, e)))?;

        tracing::debug!(name = %asset.name, written, "Served asset");
        Ok(written)
    }
}

/// One published version, identified by a tag, grouping its downloadable
/// assets.
///
/// `published_at` is by convention the creation time of the backing
/// directory or prefix. A release with zero assets is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Version tag, unique within one catalog snapshot
    pub tag_name: String,
    /// When the release was published
    pub published_at: DateTime<Utc>,
    /// Downloadable assets in enumeration order (not guaranteed sorted)
    pub assets: Vec<Asset>,
}

/// One downloadable file belonging to a release (installer, patch, manifest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Opaque backend-specific identifier, stable enough to re-resolve the
    /// same asset later (the resolved path for the filesystem medium)
    pub id: String,
    /// Backend-specific addressing info needed to open the byte stream. The
    /// filesystem medium stores the exact resolved path, not a rendering of
    /// it, so an asset with a non-UTF-8 name still re-resolves
    pub locator: PathBuf,
    /// File name
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// When the asset was published
    pub published_at: DateTime<Utc>,
    /// Download counter; the filesystem medium does not persist this, so it
    /// always reports 0 across process restarts
    pub download_count: u64,
}

/// The full ordered set of releases produced by one enumeration pass.
///
/// An immutable snapshot once returned: a recomputation wholly replaces it,
/// there is no incremental patching. Release order follows the root
/// enumeration; asset order within a release follows its tag enumeration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    releases: Vec<Release>,
}

impl Catalog {
    /// Create a catalog from releases in enumeration order.
    pub fn new(releases: Vec<Release>) -> Self {
        Self { releases }
    }

    /// Releases in enumeration order.
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// Iterate over releases in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.releases.iter()
    }

    /// Look up a release by its tag.
    pub fn release(&self, tag: &str) -> Option<&Release> {
        self.releases.iter().find(|r| r.tag_name == tag)
    }

    /// Number of releases in the catalog.
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether the catalog holds no releases.
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
