use crate::{Beam, BeamError, PeerConnection};

use std::net::SocketAddr;
use std::panic::Location;

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{ConnectInfo, FromRequestParts, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;

/// Address reported for peers when the router was not served with connect info
pub const UNKNOWN_ADDR: &str = "unknown";

/// WebSocket accept surface for a [`Beam`].
///
/// A request that cannot be upgraded gets a 500 and never becomes a peer.
/// Successful upgrades carry the beam's extra response headers.
pub async fn handler(State(beam): State<Beam>, request: Request) -> Response {
    let (mut parts, _body) = request.into_parts();

    let addr = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| UNKNOWN_ADDR.to_string());

    let upgrade = match WebSocketUpgrade::from_request_parts(&mut parts, &beam).await {
        Ok(upgrade) => upgrade,
        Err(rejection) => {
            let error = BeamError::Upgrade {
                message: rejection.body_text(),
                location: ErrorLocation::from(Location::caller()),
            };
            beam.log_peer(&addr, format_args!("Failed creating websocket: {error}"));
            beam.metrics().upgrade_failed();

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusCode::INTERNAL_SERVER_ERROR
                    .canonical_reason()
                    .unwrap_or_default(),
            )
                .into_response();
        }
    };

    let failure_beam = beam.clone();
    let failure_addr = addr.clone();
    let connection = PeerConnection::new(beam.clone(), addr);

    let mut response = beam
        .config()
        .upgrade_policy()
        .apply(upgrade)
        .on_failed_upgrade(move |e| {
            failure_beam.log_peer(
                &failure_addr,
                format_args!("Failed completing websocket handshake: {e}"),
            );
            failure_beam.metrics().upgrade_failed();
        })
        .on_upgrade(move |socket| async move {
            // Write failures are already logged by the connection
            let _ = connection.handle(socket).await;
        });

    response
        .headers_mut()
        .extend(beam.config().headers().clone());

    response
}
