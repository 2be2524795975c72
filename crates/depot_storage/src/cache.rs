//! Single-slot memoization of the catalog build.

use crate::Catalog;
use depot_error::DepotResult;
use std::future::Future;
use tokio::sync::Mutex;

/// Memoizes one catalog-build outcome per backend instance.
///
/// The slot stores the whole outcome, success or failure, so the expensive
/// two-level enumeration runs at most once per instance. Holding the lock
/// across the build gives at-most-one-concurrent-build: callers that arrive
/// while a build is in flight wait on the lock and then observe the stored
/// outcome instead of starting their own build. The slot is written only
/// after the build resolves, so a torn catalog is never observable.
#[derive(Debug, Default)]
pub struct CatalogCache {
    slot: Mutex<Option<DepotResult<Catalog>>>,
}

impl CatalogCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the memoized build outcome, running `build` on first use.
    pub async fn get_or_build<F, Fut>(&self, build: F) -> DepotResult<Catalog>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = DepotResult<Catalog>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(outcome) = slot.as_ref() {
            tracing::debug!("Catalog cache hit");
            return outcome.clone();
        }

        let outcome = build().await;
        *slot = Some(outcome.clone());
        outcome
    }

    /// Discard the memoized outcome so the next call rebuilds.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        if slot.take().is_some() {
            tracing::debug!("Invalidated memoized catalog");
        }
    }
}
