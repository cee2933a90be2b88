use crate::{health, publish};

use beam_ws::Beam;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(beam: Beam) -> Router {
    Router::new()
        // WebSocket endpoint
        .route("/ws", get(beam_ws::handler))
        // Publish endpoint
        .route("/broadcast", post(publish::publish))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(beam)
        // CORS middleware (allow all origins for WebSocket)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
