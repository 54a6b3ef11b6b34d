use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::{MissingFields, ModelError};
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const GENERIC_NOT_FOUND: &str = "The requested resource was not found";
pub const GENERIC_INTERNAL: &str = "Something went wrong";

/// Boundary error rendered as `{ success: false, error, message, fields? }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation { message: String, fields: Option<MissingFields> },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    error: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a MissingFields>,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into(), fields: None }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Kind label carried in the `error` field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "Validation Error",
            ApiError::NotFound(_) => "Not Found",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (message, fields) = match &self {
            ApiError::Validation { message, fields } => (message.as_str(), fields.as_ref()),
            ApiError::NotFound(message) | ApiError::Internal(message) => (message.as_str(), None),
        };
        let body = ErrorBody { success: false, error: self.kind(), message, fields };
        (self.status(), Json(body)).into_response()
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        let message = err.to_string();
        match err {
            ModelError::MissingFields(fields) => ApiError::Validation { message, fields: Some(fields) },
            ModelError::InvalidEmail => ApiError::validation(message),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => e.into(),
            ServiceError::NotFound(message) => ApiError::NotFound(message),
            ServiceError::Fixture(detail) => {
                error!(error = %detail, "fixture error reached a handler");
                ApiError::Internal(GENERIC_INTERNAL.into())
            }
        }
    }
}

/// Unreadable bodies (bad JSON, wrong content type) are validation failures.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}
