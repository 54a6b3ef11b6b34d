use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use models::influencer::RegistrationRequest;

use crate::errors::ApiError;

/// Registration payload from either a JSON or a url-encoded form body,
/// chosen by `Content-Type`. Anything that isn't a form goes through the JSON
/// extractor so a missing or foreign content type is reported by it.
#[derive(Debug)]
pub struct RegistrationBody(pub RegistrationRequest);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for RegistrationBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
            return Ok(RegistrationBody(RegistrationRequest::from_form_pairs(pairs)));
        }
        let Json(input) = Json::<RegistrationRequest>::from_request(req, state).await?;
        Ok(RegistrationBody(input))
    }
}
