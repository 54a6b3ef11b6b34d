pub mod health;
pub mod influencers;
pub mod live;

use std::any::Any;

use axum::body::Body;
use axum::http::{Response, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use configs::Environment;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, error, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::{ApiError, GENERIC_INTERNAL, GENERIC_NOT_FOUND};
use crate::observability::{self, PANICS_TOTAL, ROUTE_NOT_FOUND_TOTAL};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Fallback for every unmatched path.
pub async fn not_found(uri: Uri) -> ApiError {
    ROUTE_NOT_FOUND_TOTAL.inc();
    debug!(path = %uri.path(), "no route matched");
    ApiError::not_found(GENERIC_NOT_FOUND)
}

/// Turns a handler panic into the 500 envelope. The panic text is only
/// exposed to clients in development.
fn panic_response(expose_details: bool) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response<Body> + Clone {
    move |payload: Box<dyn Any + Send + 'static>| {
        let detail = if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "unknown panic payload".to_string()
        };
        PANICS_TOTAL.inc();
        error!(event = "handler_panic", error = %detail, "request handler panicked");
        let message = if expose_details { detail } else { GENERIC_INTERNAL.to_string() };
        ApiError::Internal(message).into_response()
    }
}

/// API routes without middleware. A known path called with an unsupported
/// method gets the same 404 envelope as an unknown path.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health).fallback(not_found))
        .route("/api/health/ready", get(health::ready).fallback(not_found))
        .route("/api/live/active", get(live::list_active).fallback(not_found))
        .route("/api/live/stats/overview", get(live::stats_overview).fallback(not_found))
        .route("/api/live/:id", get(live::get_session).fallback(not_found))
        // GET on the register path is a profile lookup with id `register`
        .route(
            "/api/influencers/register",
            post(influencers::register).get(influencers::profile_at_register).fallback(not_found),
        )
        .route("/api/influencers/featured", get(influencers::featured).fallback(not_found))
        .route("/api/influencers/:id", get(influencers::profile).fallback(not_found))
        .route("/metrics", get(observability::metrics).fallback(not_found))
}

/// Wrap a router with the 404 fallback, panic recovery, CORS and request tracing.
pub fn with_layers(router: Router, environment: Environment, cors: CorsLayer) -> Router {
    router
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response(environment.is_development())))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每个请求一个 span（方法、路径、版本）
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// Build the full application router: API routes, Swagger UI and middleware.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    observability::init();
    let environment = state.environment;
    let app = api_routes()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state);
    with_layers(app, environment, cors)
}
