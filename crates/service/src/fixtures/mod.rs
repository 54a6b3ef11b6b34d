//! Read-only mock catalog.
//!
//! Built once at process start, either from the data compiled into the binary
//! or from a JSON file with the same shape as the API payloads, and shared by
//! the services behind an `Arc`.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use models::influencer::{FeaturedInfluencer, InfluencerProfile};
use models::live::{LiveSession, SessionStatus};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub live: Vec<LiveSession>,
    pub upcoming: Vec<LiveSession>,
    #[serde(default)]
    pub featured: Vec<FeaturedInfluencer>,
    pub profile: InfluencerProfile,
}

impl Catalog {
    /// Built-in mock data with session times relative to `now`.
    pub fn builtin(now: DateTime<Utc>) -> Self {
        builtin::catalog(now)
    }

    pub fn from_json(content: &str) -> Result<Self, ServiceError> {
        let catalog: Catalog =
            serde_json::from_str(content).map_err(|e| ServiceError::Fixture(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ServiceError::Fixture(format!("cannot read {}: {e}", path.display())))?;
        let catalog = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            live = catalog.live.len(),
            upcoming = catalog.upcoming.len(),
            "fixture catalog loaded"
        );
        Ok(catalog)
    }

    /// Live entries must be LIVE, upcoming entries SCHEDULED, and session ids
    /// unique across both sets so lookups by id are unambiguous.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(s) = self.live.iter().find(|s| s.status() != SessionStatus::Live) {
            return Err(ServiceError::Fixture(format!("session {} in live set is not LIVE", s.id)));
        }
        if let Some(s) = self.upcoming.iter().find(|s| s.status() != SessionStatus::Scheduled) {
            return Err(ServiceError::Fixture(format!(
                "session {} in upcoming set is not SCHEDULED",
                s.id
            )));
        }
        let mut seen = HashSet::new();
        for s in self.sessions() {
            if !seen.insert(s.id.as_str()) {
                return Err(ServiceError::Fixture(format!("duplicate session id {}", s.id)));
            }
        }
        Ok(())
    }

    /// Live sessions followed by upcoming ones, in declaration order.
    pub fn sessions(&self) -> impl Iterator<Item = &LiveSession> {
        self.live.iter().chain(self.upcoming.iter())
    }
}
