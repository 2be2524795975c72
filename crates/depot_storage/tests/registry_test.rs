//! Tests for name-keyed backend resolution.

use depot_storage::{
    Backend, BackendsConfig, DepotConfig, DepotErrorKind, FilesystemBackend, FilesystemConfig,
    resolve,
};
use std::sync::Arc;
use tempfile::TempDir;

fn filesystem_config(path: &std::path::Path) -> DepotConfig {
    DepotConfig {
        backend: "filesystem".to_string(),
        backends: BackendsConfig {
            filesystem: Some(FilesystemConfig {
                path: path.to_path_buf(),
            }),
            ..BackendsConfig::default()
        },
    }
}

#[tokio::test]
async fn test_resolve_filesystem_by_name() {
    let temp_dir = TempDir::new().unwrap();
    tokio::fs::create_dir(temp_dir.path().join("v1.0.0"))
        .await
        .unwrap();
    let config = filesystem_config(temp_dir.path());

    let backend = resolve("filesystem", &config).unwrap();
    let catalog = backend.releases().await.unwrap();
    assert_eq!(catalog.len(), 1);
}

#[tokio::test]
async fn test_resolve_instance_is_passthrough() {
    let temp_dir = TempDir::new().unwrap();
    let config = filesystem_config(temp_dir.path());

    let backend: Arc<dyn Backend> =
        Arc::new(FilesystemBackend::new(temp_dir.path()).unwrap());
    let resolved = resolve(backend.clone(), &config).unwrap();
    assert!(Arc::ptr_eq(&backend, &resolved));
}

#[test]
fn test_resolve_unknown_name_is_config_error() {
    let config = DepotConfig::default();
    let err = resolve("ftp", &config).unwrap_err();
    assert!(matches!(err.kind(), DepotErrorKind::Config(_)));
}

#[test]
fn test_resolve_external_mediums_not_implemented() {
    let config = DepotConfig::default();
    for name in ["s3", "github"] {
        let err = resolve(name, &config).unwrap_err();
        assert!(matches!(err.kind(), DepotErrorKind::NotImplemented(_)));
    }
}

#[test]
fn test_resolve_filesystem_without_path_is_config_error() {
    let config = DepotConfig::default();
    let err = resolve("filesystem", &config).unwrap_err();
    assert!(matches!(err.kind(), DepotErrorKind::Config(_)));
}
