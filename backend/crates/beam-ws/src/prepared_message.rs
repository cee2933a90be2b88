use crate::FrameKind;

use axum::extract::ws::Message;
use bytes::Bytes;

/// A payload serialized once and shared by every peer queue of a single send.
///
/// The frame owns reference-counted bytes, so cloning it into N queues does
/// not copy the payload.
#[derive(Debug, Clone)]
pub struct PreparedMessage {
    kind: FrameKind,
    frame: Message,
}

impl PreparedMessage {
    pub fn new(kind: FrameKind, payload: String) -> Self {
        let frame = match kind {
            FrameKind::Text => Message::Text(payload.into()),
            FrameKind::Binary => Message::Binary(Bytes::from(payload)),
        };

        Self { kind, frame }
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Serialized payload bytes as they go on the wire
    pub fn payload(&self) -> &[u8] {
        match &self.frame {
            Message::Text(text) => text.as_str().as_bytes(),
            Message::Binary(bytes) => &bytes[..],
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.payload().len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload().is_empty()
    }

    pub(crate) fn to_frame(&self) -> Message {
        self.frame.clone()
    }
}
