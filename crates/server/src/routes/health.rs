use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use common::types::{Health, Readiness};

use crate::state::AppState;

const NO_CACHE: [(header::HeaderName, &str); 2] = [
    (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
    (header::PRAGMA, "no-cache"),
];

#[utoipa::path(get, path = "/api/health", tag = "health", responses((status = 200, description = "API is running", body = crate::openapi::HealthDoc)))]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = Health {
        success: true,
        message: "LiveBuy Local API is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.environment.to_string(),
    };
    (NO_CACHE, Json(body))
}

#[utoipa::path(get, path = "/api/health/ready", tag = "health", responses((status = 200, description = "Readiness of the API and its dependencies")))]
pub async fn ready() -> impl IntoResponse {
    (NO_CACHE, Json(Readiness::current()))
}
