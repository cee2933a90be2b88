use crate::{ApiError, PublishResponse};

use beam_ws::Beam;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

/// POST /broadcast - fan the JSON body out to every connected peer
pub async fn publish(
    State(beam): State<Beam>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<PublishResponse>), ApiError> {
    let Json(payload) = payload?;

    let report = beam.send(&payload)?;
    log::debug!(
        "Broadcast published: queued={}, dropped={}",
        report.queued,
        report.dropped_count()
    );

    Ok((StatusCode::ACCEPTED, Json(PublishResponse::from(&report))))
}
