use crate::beam_config::{MAX_BUFFER_SIZE, MIN_BUFFER_SIZE};
use crate::{BeamConfig, BeamError, BeamResult, FrameKind, LogSink, UpgradePolicy};

use std::sync::Arc;

use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Builder for [`BeamConfig`]. Each option overrides one default; `build()`
/// validates the result once, before the beam starts serving.
///
/// ```
/// use beam_ws::BeamOptions;
///
/// let config = BeamOptions::new().buffer(16).without_logger().build().unwrap();
/// assert_eq!(config.buffer_size(), 16);
/// assert!(config.logger().is_none());
/// ```
#[derive(Clone, Default)]
pub struct BeamOptions {
    config: BeamConfig,
}

impl BeamOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-peer queue capacity. Slow peers can lag this many messages behind
    /// before new messages are dropped for them.
    pub fn buffer(mut self, size: usize) -> Self {
        self.config.buffer_size = size;
        self
    }

    pub fn frame_kind(mut self, kind: FrameKind) -> Self {
        self.config.frame_kind = kind;
        self
    }

    pub fn upgrade(mut self, policy: UpgradePolicy) -> Self {
        self.config.upgrade = policy;
        self
    }

    /// Replace the extra upgrade response headers
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config.headers = headers;
        self
    }

    /// Append one extra upgrade response header
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.config.headers.append(name, value);
        self
    }

    pub fn logger(mut self, sink: impl LogSink + 'static) -> Self {
        self.config.logger = Some(Arc::new(sink));
        self
    }

    pub fn shared_logger(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.config.logger = Some(sink);
        self
    }

    /// Disable all beam logging
    pub fn without_logger(mut self) -> Self {
        self.config.logger = None;
        self
    }

    pub fn build(self) -> BeamResult<BeamConfig> {
        let buffer_size = self.config.buffer_size;
        if !(MIN_BUFFER_SIZE..=MAX_BUFFER_SIZE).contains(&buffer_size) {
            return Err(BeamError::invalid_config(format!(
                "buffer size must be {MIN_BUFFER_SIZE}-{MAX_BUFFER_SIZE}, got {buffer_size}"
            )));
        }

        let upgrade = &self.config.upgrade;
        let limits = [
            ("max_message_size", upgrade.max_message_size),
            ("max_frame_size", upgrade.max_frame_size),
            ("write_buffer_size", upgrade.write_buffer_size),
            ("max_write_buffer_size", upgrade.max_write_buffer_size),
        ];
        if let Some((name, _)) = limits.iter().find(|(_, value)| *value == Some(0)) {
            return Err(BeamError::invalid_config(format!(
                "upgrade {name} must be greater than 0"
            )));
        }

        if let (Some(frame), Some(message)) = (upgrade.max_frame_size, upgrade.max_message_size)
            && frame > message
        {
            return Err(BeamError::invalid_config(format!(
                "upgrade max_frame_size ({frame}) must not exceed max_message_size ({message})"
            )));
        }

        if let (Some(write), Some(max_write)) =
            (upgrade.write_buffer_size, upgrade.max_write_buffer_size)
            && max_write <= write
        {
            return Err(BeamError::invalid_config(format!(
                "upgrade max_write_buffer_size ({max_write}) must be greater than write_buffer_size ({write})"
            )));
        }

        Ok(self.config)
    }
}
