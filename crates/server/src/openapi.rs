use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::ToSchema;

// Documentation-only schemas mirroring the JSON payloads.

#[derive(ToSchema)]
pub struct HealthDoc {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    pub version: String,
    pub environment: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub success: bool,
    /// `Validation Error`, `Not Found` or `Internal Server Error`
    pub error: String,
    pub message: String,
    /// Present for missing required fields; supplied fields are `null`
    pub fields: Option<MissingFieldsDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct MissingFieldsDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub home_country: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct RegistrationRequestDoc {
    pub name: String,
    pub email: String,
    pub home_country: String,
    /// Platform name to handle, e.g. `{"instagram": "@me"}`
    pub social_links: Option<BTreeMap<String, String>>,
    pub bio: Option<String>,
    pub travel_experience: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct RegistrationDoc {
    pub id: String,
    pub name: String,
    pub email: String,
    pub home_country: String,
    pub social_links: Option<BTreeMap<String, String>>,
    pub bio: Option<String>,
    pub travel_experience: Option<String>,
    /// Always `pending_review`
    pub status: String,
    /// Always `not_started`
    pub kyc_status: String,
    pub created_at: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct InfluencerSummaryDoc {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub is_verified: bool,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SessionLocationDoc {
    pub city: String,
    pub country: String,
    pub country_code: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct LiveSessionDoc {
    pub id: String,
    pub influencer: InfluencerSummaryDoc,
    pub location: SessionLocationDoc,
    pub title: String,
    pub category: String,
    pub viewer_count: u64,
    /// `LIVE` or `SCHEDULED`
    pub status: String,
    /// Set when `status` is `LIVE`
    pub started_at: Option<String>,
    /// Set when `status` is `SCHEDULED`
    pub scheduled_at: Option<String>,
    pub thumbnail: String,
    pub product_count: u32,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct LiveOverviewDoc {
    pub live: Vec<LiveSessionDoc>,
    pub upcoming: Vec<LiveSessionDoc>,
    pub total_live: usize,
    pub total_upcoming: usize,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct LiveStatsDoc {
    pub active_sessions: usize,
    pub total_viewers: u64,
    pub upcoming_today: usize,
    pub countries_active: usize,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::health::ready,
        crate::routes::live::list_active,
        crate::routes::live::get_session,
        crate::routes::live::stats_overview,
        crate::routes::influencers::register,
        crate::routes::influencers::featured,
        crate::routes::influencers::profile,
    ),
    components(
        schemas(
            HealthDoc,
            ErrorDoc,
            MissingFieldsDoc,
            RegistrationRequestDoc,
            RegistrationDoc,
            InfluencerSummaryDoc,
            SessionLocationDoc,
            LiveSessionDoc,
            LiveOverviewDoc,
            LiveStatsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "live"),
        (name = "influencers")
    )
)]
pub struct ApiDoc;
