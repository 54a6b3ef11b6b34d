use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder,
};
use tracing::error;

// Prometheus metrics (default registry)
pub static REGISTRATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "livebuy_registrations_total",
        "Influencer registrations by outcome",
        &["outcome"]
    )
    .expect("register registrations_total")
});

pub static SESSION_LOOKUP_MISSES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "livebuy_session_lookup_misses_total",
        "Live session lookups for unknown ids"
    )
    .expect("register session_lookup_misses_total")
});

pub static ROUTE_NOT_FOUND_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "livebuy_route_not_found_total",
        "Requests that matched no route"
    )
    .expect("register route_not_found_total")
});

pub static PANICS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "livebuy_handler_panics_total",
        "Handler panics converted into 500 responses"
    )
    .expect("register handler_panics_total")
});

pub fn record_registration(accepted: bool) {
    let outcome = if accepted { "accepted" } else { "rejected" };
    REGISTRATIONS_TOTAL.with_label_values(&[outcome]).inc();
}

/// Touch every metric so it shows up in the exposition before first use.
pub fn init() {
    Lazy::force(&REGISTRATIONS_TOTAL);
    Lazy::force(&SESSION_LOOKUP_MISSES_TOTAL);
    Lazy::force(&ROUTE_NOT_FOUND_TOTAL);
    Lazy::force(&PANICS_TOTAL);
}

/// `GET /metrics` in the Prometheus text format.
pub async fn metrics() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&prometheus::gather(), &mut buf) {
        error!(error = %e, "failed to encode metrics");
        return (StatusCode::INTERNAL_SERVER_ERROR, [(header::CONTENT_TYPE, "text/plain")], String::new());
    }
    let body = String::from_utf8(buf).unwrap_or_default();
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}
