
use crate::{LogSink, Peer, PreparedMessage};

use std::fmt;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

/// Log sink that keeps every line for later assertions
#[derive(Clone, Default)]
pub(crate) struct CapturingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CapturingSink {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for CapturingSink {
    fn log(&self, message: fmt::Arguments<'_>) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Peer backed by a queue the test drains by hand
pub(crate) fn peer_with_queue(
    addr: &str,
    capacity: usize,
) -> (Peer, mpsc::Receiver<PreparedMessage>) {
    let (tx, rx) = mpsc::channel(capacity);
    (Peer::new(addr, tx), rx)
}

/// Drain everything currently pending and decode each payload as JSON
pub(crate) fn drain_json(rx: &mut mpsc::Receiver<PreparedMessage>) -> Vec<serde_json::Value> {
    let mut values = Vec::new();
    while let Ok(message) = rx.try_recv() {
        values.push(serde_json::from_slice(message.payload()).unwrap());
    }
    values
}
