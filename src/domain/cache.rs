//! Per-domain snapshot cache
//!
//! Readers get an immutable `Arc` snapshot of a domain's full record set;
//! every successful write invalidates that domain's entry so the next read
//! refetches and the aggregator recomputes. Invalidation is scoped to one
//! domain key, never the whole cache.

use crate::contract::{SurveyDomain, SurveyRecord};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct SnapshotCache {
    snapshots: RwLock<HashMap<SurveyDomain, Arc<Vec<SurveyRecord>>>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached snapshot for a domain, if any.
    pub fn get(&self, domain: SurveyDomain) -> Option<Arc<Vec<SurveyRecord>>> {
        self.snapshots.read().get(&domain).cloned()
    }

    /// Store a freshly loaded record set and return the shared snapshot.
    pub fn put(&self, domain: SurveyDomain, records: Vec<SurveyRecord>) -> Arc<Vec<SurveyRecord>> {
        let snapshot = Arc::new(records);
        self.snapshots.write().insert(domain, snapshot.clone());
        snapshot
    }

    /// Drop one domain's snapshot after a write.
    pub fn invalidate(&self, domain: SurveyDomain) {
        self.snapshots.write().remove(&domain);
    }
}
