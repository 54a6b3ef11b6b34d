use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use chrono::{SubsecRound, Utc};
use configs::{AppConfig, CorsConfig};
use service::Catalog;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::routes;
use crate::state::AppState;

/// `*` allows any origin; otherwise only the configured front-end origin.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    if cfg.is_wildcard() {
        return Ok(CorsLayer::very_permissive());
    }
    let origin = HeaderValue::from_str(cfg.origin.trim())
        .with_context(|| format!("invalid cors.origin {:?}", cfg.origin))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(cfg.allow_credentials))
}

/// Fixture file from configuration, or the built-in catalog anchored at now
/// (millisecond precision, like every other timestamp on the wire).
pub fn load_catalog(cfg: &AppConfig) -> anyhow::Result<Catalog> {
    match &cfg.fixtures.path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("failed to load fixtures from {path}")),
        None => {
            let catalog = Catalog::builtin(Utc::now().trunc_subsecs(3));
            info!(live = catalog.live.len(), upcoming = catalog.upcoming.len(), "using built-in catalog");
            Ok(catalog)
        }
    }
}

/// Assemble state and router from configuration.
pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let catalog = Arc::new(load_catalog(cfg)?);
    let state = AppState::new(catalog, cfg.app.environment);
    let cors = build_cors(&cfg.cors)?;
    Ok(routes::build_router(state, cors))
}

/// Public entry: build the app and serve until Ctrl+C / SIGTERM.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg)?;

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        %addr,
        environment = %cfg.app.environment,
        cors_origin = %cfg.cors.origin,
        "LiveBuy Local API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;
    info!("server shutdown complete");
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown signal received, draining connections");
}
