use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerSummary {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLocation {
    pub city: String,
    pub country: String,
    pub country_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionStatus {
    Live,
    Scheduled,
}

/// Status and its timestamp travel together: a live session carries
/// `startedAt`, a scheduled one `scheduledAt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Schedule {
    #[serde(rename = "LIVE")]
    Live {
        #[serde(rename = "startedAt")]
        started_at: DateTime<Utc>,
    },
    #[serde(rename = "SCHEDULED")]
    Scheduled {
        #[serde(rename = "scheduledAt")]
        scheduled_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSession {
    pub id: String,
    pub influencer: InfluencerSummary,
    pub location: SessionLocation,
    pub title: String,
    pub category: String,
    pub viewer_count: u64,
    #[serde(flatten)]
    pub schedule: Schedule,
    pub thumbnail: String,
    pub product_count: u32,
}

impl LiveSession {
    pub fn status(&self) -> SessionStatus {
        match self.schedule {
            Schedule::Live { .. } => SessionStatus::Live,
            Schedule::Scheduled { .. } => SessionStatus::Scheduled,
        }
    }

    pub fn is_live(&self) -> bool {
        self.status() == SessionStatus::Live
    }

    /// Start time when live, planned time when scheduled.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self.schedule {
            Schedule::Live { started_at } => started_at,
            Schedule::Scheduled { scheduled_at } => scheduled_at,
        }
    }
}

/// Payload of `GET /api/live/active`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveOverview<'a> {
    pub live: &'a [LiveSession],
    pub upcoming: &'a [LiveSession],
    pub total_live: usize,
    pub total_upcoming: usize,
}

impl<'a> LiveOverview<'a> {
    pub fn new(live: &'a [LiveSession], upcoming: &'a [LiveSession]) -> Self {
        Self { live, upcoming, total_live: live.len(), total_upcoming: upcoming.len() }
    }
}

/// Payload of `GET /api/live/stats/overview`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStats {
    pub active_sessions: usize,
    pub total_viewers: u64,
    pub upcoming_today: usize,
    pub countries_active: usize,
}

impl LiveStats {
    /// Viewer and country figures only look at the live set.
    pub fn compute(live: &[LiveSession], upcoming: &[LiveSession]) -> Self {
        let countries: BTreeSet<&str> =
            live.iter().map(|s| s.location.country_code.as_str()).collect();
        Self {
            active_sessions: live.len(),
            total_viewers: live.iter().map(|s| s.viewer_count).sum(),
            upcoming_today: upcoming.len(),
            countries_active: countries.len(),
        }
    }
}
