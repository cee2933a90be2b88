use crate::ServerErrorResult;

use beam_config::{BeamSettings, ConfigError};
use beam_ws::{BeamConfig, BeamOptions, FrameKind, UpgradePolicy};

use std::str::FromStr;

use axum::http::{HeaderName, HeaderValue};

/// Turn the `[beam]` config section into a validated broadcaster config.
///
/// `log_connections = false` leaves the broadcaster without a log sink.
pub fn build_beam_config(settings: &BeamSettings) -> ServerErrorResult<BeamConfig> {
    let mut options = BeamOptions::new()
        .buffer(settings.buffer_size)
        .frame_kind(FrameKind::from_str(&settings.frame)?)
        .upgrade(UpgradePolicy {
            max_message_size: settings.max_message_size,
            max_frame_size: settings.max_frame_size,
            ..Default::default()
        });

    for (name, value) in &settings.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ConfigError::beam(format!("Invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| ConfigError::beam(format!("Invalid value for header '{name}': {e}")))?;
        options = options.header(header_name, header_value);
    }

    if !settings.log_connections {
        options = options.without_logger();
    }

    Ok(options.build()?)
}
