use beam_ws::Beam;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - status with the current peers
pub async fn health(State(beam): State<Beam>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "peers": beam.peer_count(),
        "oldest_peer_since": beam
            .registry()
            .oldest_connected_at()
            .map(|connected_at| connected_at.to_rfc3339()),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe
pub async fn readiness() -> Response {
    // Accepting connections as soon as the router is serving
    (StatusCode::OK, "Ready").into_response()
}
