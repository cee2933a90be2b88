use crate::{Peer, PeerId, PeerRegistration};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

/// Set of active peers, shared by connection tasks and the broadcaster.
///
/// Every operation takes the same lock. None of them await or write to a
/// socket while holding it.
pub struct PeerRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

struct RegistryInner {
    /// All active peers by peer_id
    peers: HashMap<PeerId, Peer>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                peers: HashMap::new(),
            })),
        }
    }

    /// Add a peer and return the guard that removes it again.
    ///
    /// None when a peer with the same id is already registered; that entry
    /// stays and no guard is handed out for it.
    pub fn register(&self, peer: Peer) -> Option<PeerRegistration> {
        let peer_id = peer.id();
        self.add(peer)
            .then(|| PeerRegistration::new(self.clone(), peer_id))
    }

    /// Earliest connection time among registered peers
    pub fn oldest_connected_at(&self) -> Option<DateTime<Utc>> {
        self.lock()
            .peers
            .values()
            .map(Peer::connected_at)
            .min()
    }

    /// Insert a peer. Returns false if a peer with the same id is already
    /// registered; the existing entry is kept.
    pub fn add(&self, peer: Peer) -> bool {
        let mut inner = self.lock();

        if inner.peers.contains_key(&peer.id()) {
            return false;
        }

        inner.peers.insert(peer.id(), peer);
        true
    }

    /// Remove a peer if present. Removing twice is a no-op.
    pub fn remove(&self, peer_id: PeerId) -> Option<Peer> {
        self.lock().peers.remove(&peer_id)
    }

    /// Point-in-time copy of the registered peers
    pub fn snapshot(&self) -> Vec<Peer> {
        self.lock().peers.values().cloned().collect()
    }

    pub fn contains(&self, peer_id: PeerId) -> bool {
        self.lock().peers.contains_key(&peer_id)
    }

    pub fn len(&self) -> usize {
        self.lock().peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().peers.is_empty()
    }

    // A panic elsewhere cannot leave the map half-updated, so a poisoned
    // lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PeerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for PeerRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
