/// Result of a non-blocking push onto a peer queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOutcome {
    /// Message is pending for the peer's delivery loop
    Queued,
    /// Queue at capacity, message dropped for this peer only
    Full,
    /// Delivery loop already gone, peer is being torn down
    Closed,
}
