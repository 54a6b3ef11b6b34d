use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ApiResponse;
use models::influencer::{InfluencerProfile, Registration};
use service::services::registration_service::CONFIRMATION_MESSAGE;
use tracing::info;

use crate::errors::ApiError;
use crate::extract::RegistrationBody;
use crate::observability::record_registration;
use crate::state::AppState;

/// Submit a creator application
#[utoipa::path(
    post, path = "/api/influencers/register", tag = "influencers",
    request_body = crate::openapi::RegistrationRequestDoc,
    responses(
        (status = 201, description = "Application accepted for review", body = crate::openapi::RegistrationDoc),
        (status = 400, description = "Missing fields, bad email or unreadable JSON/form body", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<RegistrationBody, ApiError>,
) -> Result<(StatusCode, Json<ApiResponse<Registration>>), ApiError> {
    let result = payload
        .and_then(|RegistrationBody(input)| state.registrations.register(input).map_err(ApiError::from));

    match result {
        Ok(registration) => {
            record_registration(true);
            Ok((StatusCode::CREATED, Json(ApiResponse::with_message(registration, CONFIRMATION_MESSAGE))))
        }
        Err(e) => {
            record_registration(false);
            info!(event = "registration_rejected", reason = %e, "influencer registration rejected");
            Err(e)
        }
    }
}

#[utoipa::path(get, path = "/api/influencers/featured", tag = "influencers", responses((status = 200, description = "Featured influencers for the landing page")))]
pub async fn featured(State(state): State<AppState>) -> Response {
    Json(ApiResponse::ok(state.influencers.featured())).into_response()
}

#[utoipa::path(
    get, path = "/api/influencers/{id}", tag = "influencers",
    params(("id" = String, Path, description = "Influencer id; any value resolves")),
    responses((status = 200, description = "Influencer profile"))
)]
pub async fn profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<InfluencerProfile>> {
    Json(ApiResponse::ok(state.influencers.profile(&id)))
}

/// `GET /api/influencers/register`: the literal segment is treated as a profile id.
pub async fn profile_at_register(State(state): State<AppState>) -> Json<ApiResponse<InfluencerProfile>> {
    Json(ApiResponse::ok(state.influencers.profile("register")))
}
