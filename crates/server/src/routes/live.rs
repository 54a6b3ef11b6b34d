use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ApiResponse;
use models::live::LiveStats;

use crate::errors::ApiError;
use crate::observability::SESSION_LOOKUP_MISSES_TOTAL;
use crate::state::AppState;

// The overview and session payloads borrow from the shared catalog, so these
// handlers serialize in place instead of returning an owned `Json<T>`.

#[utoipa::path(get, path = "/api/live/active", tag = "live", responses((status = 200, description = "Live and upcoming sessions with their counts", body = crate::openapi::LiveOverviewDoc)))]
pub async fn list_active(State(state): State<AppState>) -> Response {
    Json(ApiResponse::ok(state.live.list_active())).into_response()
}

#[utoipa::path(
    get, path = "/api/live/{id}", tag = "live",
    params(("id" = String, Path, description = "Session id, live or scheduled")),
    responses(
        (status = 200, description = "Session found", body = crate::openapi::LiveSessionDoc),
        (status = 404, description = "No session with this id", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_session(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, ApiError> {
    let session = state.live.get_by_id(&id).inspect_err(|_| SESSION_LOOKUP_MISSES_TOTAL.inc())?;
    Ok(Json(ApiResponse::ok(session)).into_response())
}

#[utoipa::path(get, path = "/api/live/stats/overview", tag = "live", responses((status = 200, description = "Aggregates over the live set", body = crate::openapi::LiveStatsDoc)))]
pub async fn stats_overview(State(state): State<AppState>) -> Json<ApiResponse<LiveStats>> {
    Json(ApiResponse::ok(state.live.stats()))
}
