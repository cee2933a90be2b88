use crate::{FrameKind, LogCrateSink, LogSink, UpgradePolicy};

use std::sync::Arc;

use axum::http::HeaderMap;

// Per-peer queue capacity constraints
pub const MIN_BUFFER_SIZE: usize = 1;
pub const MAX_BUFFER_SIZE: usize = 10000;
pub const DEFAULT_BUFFER_SIZE: usize = 100;

/// Immutable broadcaster configuration.
///
/// Built through [`BeamOptions`](crate::BeamOptions), which validates it.
/// `Default` gives the documented defaults: 100 messages per peer, text
/// frames, default upgrade policy, no extra headers, `log` facade sink.
#[derive(Clone)]
pub struct BeamConfig {
    pub(crate) buffer_size: usize,
    pub(crate) frame_kind: FrameKind,
    pub(crate) upgrade: UpgradePolicy,
    pub(crate) headers: HeaderMap,
    pub(crate) logger: Option<Arc<dyn LogSink>>,
}

impl BeamConfig {
    /// Messages each peer may have pending before new ones are dropped
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn frame_kind(&self) -> FrameKind {
        self.frame_kind
    }

    pub fn upgrade_policy(&self) -> &UpgradePolicy {
        &self.upgrade
    }

    /// Headers added to every successful upgrade response
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn logger(&self) -> Option<&Arc<dyn LogSink>> {
        self.logger.as_ref()
    }
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            frame_kind: FrameKind::default(),
            upgrade: UpgradePolicy::default(),
            headers: HeaderMap::new(),
            logger: Some(Arc::new(LogCrateSink)),
        }
    }
}

impl std::fmt::Debug for BeamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeamConfig")
            .field("buffer_size", &self.buffer_size)
            .field("frame_kind", &self.frame_kind)
            .field("upgrade", &self.upgrade)
            .field("headers", &self.headers)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}
