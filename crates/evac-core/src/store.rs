//! Dataset store: atomic snapshot replacement and staleness tracking.
//!
//! The store owns the single current `Arc<HazardDataset>`.  A refresh
//! replaces the whole working set in one swap; readers that captured the
//! previous `Arc` keep an unchanged view for as long as they hold it, which
//! is exactly the snapshot-isolation guarantee the planner relies on.
//!
//! When a refresh fails the store keeps the last-known-good snapshot and
//! flags it stale — degraded data is surfaced to callers, never hidden.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::{CoreResult, HazardDataset, HazardZone, parse_feed};

/// Freshness of the snapshot returned by [`DatasetStore::snapshot`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub enum FeedHealth {
    /// The snapshot came from the most recent successful refresh.
    Fresh,
    /// At least one refresh has failed since this snapshot was published.
    Stale,
}

/// A captured view of the current dataset plus its freshness.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub dataset: Arc<HazardDataset>,
    pub health:  FeedHealth,
}

/// Owner of the current hazard dataset.
///
/// Thread-safe: refreshes and reads may race freely.  The lock is held only
/// for the pointer swap; datasets themselves are immutable.
pub struct DatasetStore {
    current:          RwLock<Arc<HazardDataset>>,
    next_snapshot_id: AtomicU64,
    stale:            AtomicBool,
}

impl DatasetStore {
    /// Create a store holding an empty snapshot 0.
    pub fn new() -> Self {
        Self {
            current:          RwLock::new(Arc::new(HazardDataset::empty(0))),
            next_snapshot_id: AtomicU64::new(1),
            stale:            AtomicBool::new(false),
        }
    }

    /// Publish a new snapshot from already-validated zones.
    ///
    /// Clears the stale flag and returns the published dataset.
    pub fn replace(
        &self,
        zones:              Vec<HazardZone>,
        captured_unix_secs: i64,
    ) -> Arc<HazardDataset> {
        let snapshot_id = self.next_snapshot_id.fetch_add(1, Ordering::Relaxed);
        let dataset = Arc::new(HazardDataset { snapshot_id, captured_unix_secs, zones });
        *self.current.write() = Arc::clone(&dataset);
        self.stale.store(false, Ordering::Relaxed);
        tracing::debug!(snapshot_id, zones = dataset.len(), "hazard dataset replaced");
        dataset
    }

    /// Parse, validate, and publish a raw feed response.
    ///
    /// On any parse or validation error the previous snapshot stays current
    /// and the store is marked stale.
    pub fn ingest_feed(
        &self,
        body:               &str,
        captured_unix_secs: i64,
    ) -> CoreResult<Arc<HazardDataset>> {
        let result = parse_feed(body).and_then(|entries| {
            let snapshot_id = self.next_snapshot_id.fetch_add(1, Ordering::Relaxed);
            HazardDataset::from_feed(entries, snapshot_id, captured_unix_secs)
        });
        match result {
            Ok(dataset) => {
                let dataset = Arc::new(dataset);
                *self.current.write() = Arc::clone(&dataset);
                self.stale.store(false, Ordering::Relaxed);
                tracing::debug!(
                    snapshot_id = dataset.snapshot_id,
                    zones = dataset.len(),
                    "hazard feed ingested"
                );
                Ok(dataset)
            }
            Err(e) => {
                self.mark_unavailable();
                Err(e)
            }
        }
    }

    /// Record that a refresh failed upstream (fetch error, bad payload).
    ///
    /// Keeps the last-known-good snapshot; subsequent [`snapshot`] calls
    /// report `FeedHealth::Stale` until the next successful refresh.
    ///
    /// [`snapshot`]: DatasetStore::snapshot
    pub fn mark_unavailable(&self) {
        self.stale.store(true, Ordering::Relaxed);
        tracing::warn!("hazard feed unavailable, keeping last-known-good snapshot");
    }

    /// Capture the current dataset and its freshness.
    ///
    /// The returned `Arc` is immune to later refreshes — planners hold it
    /// for the lifetime of a plan.
    pub fn snapshot(&self) -> Snapshot {
        let dataset = Arc::clone(&self.current.read());
        let health = if self.stale.load(Ordering::Relaxed) {
            FeedHealth::Stale
        } else {
            FeedHealth::Fresh
        };
        Snapshot { dataset, health }
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}
