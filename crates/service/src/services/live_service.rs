use std::sync::Arc;

use models::live::{LiveOverview, LiveSession, LiveStats};
use tracing::debug;

use crate::errors::ServiceError;
use crate::fixtures::Catalog;

/// Read-only directory over the live and upcoming sessions of the catalog.
#[derive(Debug, Clone)]
pub struct LiveService {
    catalog: Arc<Catalog>,
}

impl LiveService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Both sets in full, with their counts.
    pub fn list_active(&self) -> LiveOverview<'_> {
        LiveOverview::new(&self.catalog.live, &self.catalog.upcoming)
    }

    /// Linear scan over live then upcoming sessions.
    pub fn get_by_id(&self, id: &str) -> Result<&LiveSession, ServiceError> {
        self.catalog.sessions().find(|s| s.id == id).ok_or_else(|| {
            debug!(session_id = %id, "live session lookup missed");
            ServiceError::not_found("Live session")
        })
    }

    pub fn stats(&self) -> LiveStats {
        LiveStats::compute(&self.catalog.live, &self.catalog.upcoming)
    }
}
