use crate::{PeerId, PeerRegistry};

/// Keeps a peer registered for as long as the guard lives.
///
/// Deregistration happens exactly once: on `release()` or on drop, including
/// drops during unwinding.
pub struct PeerRegistration {
    registry: PeerRegistry,
    peer_id: PeerId,
    released: bool,
}

impl PeerRegistration {
    pub(crate) fn new(registry: PeerRegistry, peer_id: PeerId) -> Self {
        Self {
            registry,
            peer_id,
            released: false,
        }
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    /// Remove the peer now. Returns true only for the call that removed it.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }

        self.released = true;
        self.registry.remove(self.peer_id).is_some()
    }
}

impl Drop for PeerRegistration {
    fn drop(&mut self) {
        self.release();
    }
}
