/// Per-call outcome of a broadcast
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendReport {
    /// Peers that now have the message pending
    pub queued: usize,
    /// Addresses of peers whose queue was full; the message was dropped for them
    pub dropped: Vec<String>,
}

impl SendReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// True when no registered peer missed the message
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}
