//! Tests for catalog-build memoization.

use depot_storage::{Catalog, CatalogCache};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test]
async fn test_concurrent_callers_share_one_build() {
    let cache = Arc::new(CatalogCache::new());
    let builds = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let cache = cache.clone();
        let builds = builds.clone();
        handles.push(tokio::spawn(async move {
            cache
                .get_or_build(|| async {
                    builds.fetch_add(1, Ordering::SeqCst);
                    // Suspend mid-build so every sibling is in flight
                    // before the outcome lands in the slot.
                    tokio::task::yield_now().await;
                    Ok(Catalog::default())
                })
                .await
        }));
    }

    for handle in handles {
        let catalog = handle.await.unwrap().unwrap();
        assert!(catalog.is_empty());
    }
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalidate_triggers_one_more_build() {
    let cache = CatalogCache::new();
    let builds = AtomicUsize::new(0);

    let build = || async {
        builds.fetch_add(1, Ordering::SeqCst);
        Ok(Catalog::default())
    };

    cache.get_or_build(build).await.unwrap();
    cache.get_or_build(build).await.unwrap();
    assert_eq!(builds.load(Ordering::SeqCst), 1);

    cache.invalidate().await;
    cache.get_or_build(build).await.unwrap();
    assert_eq!(builds.load(Ordering::SeqCst), 2);
}
