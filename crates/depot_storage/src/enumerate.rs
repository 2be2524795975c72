//! Directory-level enumeration with concurrent metadata resolution.

use chrono::{DateTime, Utc};
use depot_error::{DepotError, DepotResult, EnumerationError, EnumerationErrorKind};
use std::path::{Path, PathBuf};

/// One physical object observed during a single enumeration pass.
///
/// Ephemeral: produced and consumed within one pass, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageEntry {
    /// Leaf name of the entry
    pub name: String,
    /// Fully resolved location
    pub path: PathBuf,
    /// Whether the entry is a directory
    pub is_directory: bool,
    /// Size in bytes (meaningful for file entries)
    pub size: u64,
    /// Creation time of the entry
    pub created_at: DateTime<Utc>,
}

/// List the immediate children of one directory level.
///
/// `None` yields an empty sequence rather than an error, which lets callers
/// enumerate an optional nested location without special-casing.
///
/// Metadata for every listed name is resolved concurrently; the call waits
/// for all lookups before returning. Any failure — the listing itself or a
/// single entry's metadata — fails the whole enumeration with no partial
/// results. The returned order matches the order of the underlying listing,
/// which is not necessarily lexicographic or chronological.
#[tracing::instrument]
pub async fn list_entries(location: Option<&Path>) -> DepotResult<Vec<StorageEntry>> {
    let Some(location) = location else {
        return Ok(Vec::new());
    };

    let mut dir = tokio::fs::read_dir(location).await.map_err(|e| {
        EnumerationError::new(EnumerationErrorKind::ListDir(format!(
            "{}: {}",
            location.display(),
            e
        )))
    })?;

    let mut children = Vec::new();
    while let Some(child) = dir.next_entry().await.map_err(|e| {
        EnumerationError::new(EnumerationErrorKind::ListDir(format!(
            "{}: {}",
            location.display(),
            e
        )))
    })? {
        children.push(child);
    }

    let lookups = children.into_iter().map(|child| async move {
        let metadata = child.metadata().await.map_err(|e| {
            EnumerationError::new(EnumerationErrorKind::EntryMetadata(format!(
                "{}: {}",
                child.path().display(),
                e
            )))
        })?;

        // Not every filesystem records a birth time; fall back to mtime.
        let created = metadata
            .created()
            .or_else(|_| metadata.modified())
            .map_err(|e| {
                EnumerationError::new(EnumerationErrorKind::EntryMetadata(format!(
                    "{}: {}",
                    child.path().display(),
                    e
                )))
            })?;

        Ok::<_, DepotError>(StorageEntry {
            name: child.file_name().to_string_lossy().into_owned(),
            path: child.path(),
            is_directory: metadata.is_dir(),
            size: metadata.len(),
            created_at: created.into(),
        })
    });

    let entries = futures::future::try_join_all(lookups).await?;

    tracing::debug!(
        location = %location.display(),
        count = entries.len(),
        "Enumerated directory level"
    );
    Ok(entries)
}
