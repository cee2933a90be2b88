use crate::{ConfigError, ConfigErrorResult};

use std::collections::BTreeMap;

use serde::Deserialize;

pub const DEFAULT_BUFFER_SIZE: usize = 100;
pub const MIN_BUFFER_SIZE: usize = 1;
pub const MAX_BUFFER_SIZE: usize = 10_000;

pub const FRAME_TEXT: &str = "text";
pub const FRAME_BINARY: &str = "binary";
pub const DEFAULT_FRAME: &str = FRAME_TEXT;

/// `[beam]` section: how the fan-out behaves.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BeamSettings {
    /// Per-peer queue capacity
    pub buffer_size: usize,
    /// "text" or "binary"
    pub frame: String,
    /// Forward per-connection log lines to the server log
    pub log_connections: bool,
    /// Extra headers on every upgrade response
    pub headers: BTreeMap<String, String>,
    pub max_message_size: Option<usize>,
    pub max_frame_size: Option<usize>,
}

impl Default for BeamSettings {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            frame: String::from(DEFAULT_FRAME),
            log_connections: true,
            headers: BTreeMap::new(),
            max_message_size: None,
            max_frame_size: None,
        }
    }
}

impl BeamSettings {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_BUFFER_SIZE..=MAX_BUFFER_SIZE).contains(&self.buffer_size) {
            return Err(ConfigError::beam(format!(
                "beam.buffer_size must be {}-{}, got {}",
                MIN_BUFFER_SIZE, MAX_BUFFER_SIZE, self.buffer_size
            )));
        }

        let frame = self.frame.to_lowercase();
        if frame != FRAME_TEXT && frame != FRAME_BINARY {
            return Err(ConfigError::beam(format!(
                "beam.frame must be '{}' or '{}', got '{}'",
                FRAME_TEXT, FRAME_BINARY, self.frame
            )));
        }

        for name in self.headers.keys() {
            if name.trim().is_empty() {
                return Err(ConfigError::beam("beam.headers must not contain empty names"));
            }
        }

        if self.max_message_size == Some(0) {
            return Err(ConfigError::beam("beam.max_message_size must be > 0"));
        }

        if self.max_frame_size == Some(0) {
            return Err(ConfigError::beam("beam.max_frame_size must be > 0"));
        }

        if let (Some(frame_size), Some(message_size)) = (self.max_frame_size, self.max_message_size)
            && frame_size > message_size
        {
            return Err(ConfigError::beam(format!(
                "beam.max_frame_size ({}) must not exceed beam.max_message_size ({})",
                frame_size, message_size
            )));
        }

        Ok(())
    }
}
