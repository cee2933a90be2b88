use crate::{OfferOutcome, PeerId, PreparedMessage};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc::{self, error::TrySendError};

/// Server-side handle for one connected client.
///
/// Holds the producer side of the peer's bounded outbound queue. The consumer
/// side belongs to the peer's delivery loop and never leaves it.
#[derive(Debug, Clone)]
pub struct Peer {
    id: PeerId,
    addr: Arc<str>,
    connected_at: DateTime<Utc>,
    queue: mpsc::Sender<PreparedMessage>,
}

impl Peer {
    pub fn new(addr: impl Into<Arc<str>>, queue: mpsc::Sender<PreparedMessage>) -> Self {
        Self {
            id: PeerId::new(),
            addr: addr.into(),
            connected_at: Utc::now(),
            queue,
        }
    }

    pub fn id(&self) -> PeerId {
        self.id
    }

    /// Remote address, diagnostics only
    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }

    /// Push without waiting. A full queue rejects the message.
    pub fn offer(&self, message: PreparedMessage) -> OfferOutcome {
        match self.queue.try_send(message) {
            Ok(()) => OfferOutcome::Queued,
            Err(TrySendError::Full(_)) => OfferOutcome::Full,
            Err(TrySendError::Closed(_)) => OfferOutcome::Closed,
        }
    }
}
