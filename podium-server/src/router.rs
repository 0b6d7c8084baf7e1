use crate::config::BrokerConfig;
use crate::hub::Hub;
use crate::signaling::{SignalingService, ws_handler};
use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use podium_core::IceConfig;
use serde::Serialize;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info};

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub rooms: usize,
}

/// Routes of the broker:
///
/// - `GET /ws`: signaling WebSocket
/// - `GET /ice-config`: ICE servers, with fresh relay credentials if enabled
/// - `GET /healthz`: liveness
/// - anything else: the static frontend, when configured
pub fn router(config: &BrokerConfig, service: SignalingService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/ws", get(ws_handler))
        .route("/ice-config", get(ice_config))
        .route("/healthz", get(health));

    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors).with_state(service)
}

/// Runs the broker on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, config: &BrokerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let service = SignalingService::new(Hub::new(), config.relay_credentials());
    let app = router(config, service);

    let addr = listener
        .local_addr()
        .context("Listener has no local address")?;
    info!("Signaling server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server terminated unexpectedly")
}

async fn ice_config(
    State(service): State<SignalingService>,
) -> Result<Json<IceConfig>, StatusCode> {
    service.ice_config().await.map(Json).map_err(|e| {
        error!("Failed to build ICE config: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

async fn health(State(service): State<SignalingService>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        rooms: service.hub().room_count(),
    })
}
