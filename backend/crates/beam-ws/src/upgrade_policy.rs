use axum::extract::ws::WebSocketUpgrade;

/// Limits applied to every WebSocket handshake. `None` keeps the
/// underlying library default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradePolicy {
    /// Largest accepted incoming message, in bytes
    pub max_message_size: Option<usize>,
    /// Largest accepted incoming frame, in bytes
    pub max_frame_size: Option<usize>,
    /// Bytes buffered before a write is flushed to the socket
    pub write_buffer_size: Option<usize>,
    /// Hard cap on the write buffer; writes past it fail
    pub max_write_buffer_size: Option<usize>,
}

impl UpgradePolicy {
    pub(crate) fn apply(&self, mut upgrade: WebSocketUpgrade) -> WebSocketUpgrade {
        if let Some(size) = self.max_message_size {
            upgrade = upgrade.max_message_size(size);
        }
        if let Some(size) = self.max_frame_size {
            upgrade = upgrade.max_frame_size(size);
        }
        if let Some(size) = self.write_buffer_size {
            upgrade = upgrade.write_buffer_size(size);
        }
        if let Some(size) = self.max_write_buffer_size {
            upgrade = upgrade.max_write_buffer_size(size);
        }
        upgrade
    }
}
