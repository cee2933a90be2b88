use metrics::{counter, gauge};

/// Metrics collector for beam operations.
///
/// Recording is a no-op until the embedding process installs a recorder.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "beam_ws" }
    }

    /// Record peer registered after a successful upgrade
    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// Record peer torn down
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    pub fn upgrade_failed(&self) {
        counter!(format!("{}.upgrades.failed", self.prefix)).increment(1);
    }

    /// Record one send call fanned out to `peers` registered peers
    pub fn broadcast_published(&self, peers: usize) {
        counter!(format!("{}.broadcast.published", self.prefix)).increment(1);
        gauge!(format!("{}.broadcast.peers", self.prefix)).set(peers as f64);
    }

    pub fn messages_queued(&self, count: usize) {
        counter!(format!("{}.messages.queued", self.prefix)).increment(count as u64);
    }

    pub fn messages_dropped(&self, count: usize) {
        counter!(format!("{}.messages.dropped", self.prefix)).increment(count as u64);
    }

    pub fn message_written(&self) {
        counter!(format!("{}.messages.written", self.prefix)).increment(1);
    }

    pub fn serialization_failed(&self) {
        counter!(format!("{}.errors.serialization", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
