use crate::{
    BeamConfig, BeamError, BeamResult, Metrics, OfferOutcome, PeerRegistry, PreparedMessage,
    SendReport,
};

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use serde::Serialize;

/// Fan-out broadcaster.
///
/// Mount [`handler`](crate::handler) with a `Beam` as router state to accept
/// peers, then call [`Beam::send`] from anywhere to push a payload to all of
/// them. Clones share the same registry.
#[derive(Clone)]
pub struct Beam {
    inner: Arc<BeamInner>,
}

struct BeamInner {
    config: BeamConfig,
    registry: PeerRegistry,
    metrics: Metrics,
}

impl Beam {
    pub fn new(config: BeamConfig) -> Self {
        Self {
            inner: Arc::new(BeamInner {
                config,
                registry: PeerRegistry::new(),
                metrics: Metrics::new(),
            }),
        }
    }

    pub fn config(&self) -> &BeamConfig {
        &self.inner.config
    }

    pub fn registry(&self) -> &PeerRegistry {
        &self.inner.registry
    }

    pub fn metrics(&self) -> &Metrics {
        &self.inner.metrics
    }

    /// Number of currently registered peers
    pub fn peer_count(&self) -> usize {
        self.inner.registry.len()
    }

    /// Send a payload to every connected peer.
    ///
    /// Fails only when the payload cannot be serialized, in which case no
    /// peer is touched. A peer with a full queue misses this message; that is
    /// reported in the returned [`SendReport`] and never fails the call.
    pub fn send<T>(&self, payload: &T) -> BeamResult<SendReport>
    where
        T: Serialize + ?Sized,
    {
        let message = self.prepare(payload)?;
        Ok(self.send_prepared(message))
    }

    /// Serialize a payload once into the configured frame kind
    #[track_caller]
    pub fn prepare<T>(&self, payload: &T) -> BeamResult<PreparedMessage>
    where
        T: Serialize + ?Sized,
    {
        let location = ErrorLocation::from(Location::caller());
        let encoded = serde_json::to_string(payload).map_err(|source| {
            self.inner.metrics.serialization_failed();
            BeamError::Serialization { source, location }
        })?;

        Ok(PreparedMessage::new(self.config().frame_kind(), encoded))
    }

    /// Offer an already prepared message to every registered peer
    pub fn send_prepared(&self, message: PreparedMessage) -> SendReport {
        let peers = self.inner.registry.snapshot();
        let mut report = SendReport::default();

        for peer in &peers {
            match peer.offer(message.clone()) {
                OfferOutcome::Queued => report.queued += 1,
                OfferOutcome::Full => report.dropped.push(peer.addr().to_string()),
                OfferOutcome::Closed => {}
            }
        }

        let metrics = &self.inner.metrics;
        metrics.broadcast_published(peers.len());
        metrics.messages_queued(report.queued);

        if !report.dropped.is_empty() {
            metrics.messages_dropped(report.dropped.len());
            self.log(format_args!(
                "Discarded buffer overflow message for {}",
                report.dropped.join(",")
            ));
        }

        report
    }

    pub(crate) fn log(&self, message: fmt::Arguments<'_>) {
        if let Some(sink) = self.config().logger() {
            sink.log(message);
        }
    }

    pub(crate) fn log_peer(&self, addr: &str, message: fmt::Arguments<'_>) {
        if let Some(sink) = self.config().logger() {
            sink.log(format_args!("[{addr}] {message}"));
        }
    }
}
