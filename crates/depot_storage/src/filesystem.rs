//! Filesystem-backed release catalog.
//!
//! This backend interprets a base directory as the release catalog: one
//! subdirectory per version tag, each holding that release's asset files.
//! Nesting beyond one level is not interpreted — directories inside a tag
//! directory are ignored, as are stray files at the base level.
//!
//! # Example Structure
//!
//! ```text
//! /srv/depot/releases/
//! ├── v1.0.0/
//! │   ├── app.nupkg
//! │   └── RELEASES
//! └── v1.1.0-alpha/
//!     └── app.nupkg
//! ```

use crate::enumerate::{StorageEntry, list_entries};
use crate::{Asset, AssetStream, Backend, Catalog, CatalogCache, DepotConfig, Release};
use depot_error::{ConfigError, DepotError, DepotResult, NotFoundError, StreamError};
use std::path::{Path, PathBuf};

/// Filesystem storage backend.
///
/// The catalog is memoized for the lifetime of the instance: releases added
/// to the base directory after the first [`Backend::releases`] call are
/// observed only through [`FilesystemBackend::refresh`] or a fresh instance.
/// That choice is deliberate — a catalog snapshot never mutates under a
/// caller that is mid-way through serving it.
#[derive(Debug)]
pub struct FilesystemBackend {
    base_dir: PathBuf,
    catalog: CatalogCache,
}

impl FilesystemBackend {
    /// Create a filesystem backend rooted at `base_dir`.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error when `base_dir` does not exist or is
    /// not a directory. Validation is eager: a backend over a missing base
    /// directory is never constructed.
    #[tracing::instrument(skip(base_dir))]
    pub fn new(base_dir: impl Into<PathBuf>) -> DepotResult<Self> {
        let base_dir = base_dir.into();

        if !base_dir.is_dir() {
            return Err(ConfigError::new(format!(
                "filesystem backend base directory does not exist: {}",
                base_dir.display()
            ))
            .into());
        }

        tracing::info!(path = %base_dir.display(), "Created filesystem backend");
        Ok(Self {
            base_dir,
            catalog: CatalogCache::new(),
        })
    }

    /// Create a filesystem backend from loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error when `backends.filesystem.path` is
    /// absent or does not point at an existing directory.
    pub fn from_config(config: &DepotConfig) -> DepotResult<Self> {
        let filesystem = config.backends.filesystem.as_ref().ok_or_else(|| {
            ConfigError::new(
                "filesystem backend requires `backends.filesystem.path` or \
                 DEPOT_BACKENDS__FILESYSTEM__PATH",
            )
        })?;
        Self::new(filesystem.path.clone())
    }

    /// Base directory this backend enumerates.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Discard the memoized catalog and rebuild it from the directory tree.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> DepotResult<Catalog> {
        self.catalog.invalidate().await;
        self.releases().await
    }

    /// Two-phase fold of the directory tree into the release catalog.
    ///
    /// Phase one keeps only directories at the base level, one release stub
    /// per tag. Phase two enumerates every tag directory concurrently and
    /// keeps only its files as assets. Either phase failing fails the whole
    /// build; a partial catalog is never returned.
    async fn build_catalog(&self) -> DepotResult<Catalog> {
        let root = list_entries(Some(&self.base_dir)).await?;
        let tags: Vec<StorageEntry> = root.into_iter().filter(|e| e.is_directory).collect();

        let builds = tags.into_iter().map(|tag| async move {
            let entries = list_entries(Some(&tag.path)).await?;
            let assets = entries
                .into_iter()
                .filter(|e| !e.is_directory)
                .map(|e| Asset {
                    // The resolved path doubles as the stable identifier
                    // and the locator for this medium.
                    id: e.path.to_string_lossy().into_owned(),
                    locator: e.path,
                    name: e.name,
                    size: e.size,
                    published_at: e.created_at,
                    download_count: 0,
                })
                .collect();

            Ok::<_, DepotError>(Release {
                tag_name: tag.name,
                published_at: tag.created_at,
                assets,
            })
        });

        let releases = futures::future::try_join_all(builds).await?;

        tracing::info!(
            path = %self.base_dir.display(),
            releases = releases.len(),
            "Built release catalog"
        );
        Ok(Catalog::new(releases))
    }
}

#[async_trait::async_trait]
impl Backend for FilesystemBackend {
    #[tracing::instrument(skip(self))]
    async fn releases(&self) -> DepotResult<Catalog> {
        self.catalog.get_or_build(|| self.build_catalog()).await
    }

    #[tracing::instrument(skip(self, asset), fields(id = %asset.id, name = %asset.name))]
    async fn get_asset_stream(&self, asset: &Asset) -> DepotResult<AssetStream> {
        let path = asset.locator.as_path();

        let file = tokio::fs::File::open(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DepotError::from(NotFoundError::new(path.display().to_string()))
            } else {
                DepotError::from(StreamError::new(format!("{}: {}", path.display(), e)))
            }
        })?;

        tracing::debug!(
            path = %path.display(),
            size = asset.size,
            "Opened asset stream"
        );
        Ok(Box::pin(file))
    }
}
