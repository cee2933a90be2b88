use crate::{Beam, BeamError, BeamResult, Peer, PreparedMessage};

use std::fmt;
use std::panic::Location;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{Sink, SinkExt, Stream, StreamExt};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Upper bound on the close handshake once a connection is already ending
const CLOSE_TIMEOUT: Duration = Duration::from_secs(1);

/// Owns one upgraded connection from registration to teardown
pub struct PeerConnection {
    beam: Beam,
    addr: String,
}

impl PeerConnection {
    pub fn new(beam: Beam, addr: impl Into<String>) -> Self {
        Self {
            beam,
            addr: addr.into(),
        }
    }

    /// Register a peer for the socket and deliver its queue until either
    /// side ends the connection.
    ///
    /// Returns `Err` only for a failed write. The peer is deregistered and
    /// the socket closed on every path.
    pub async fn handle(self, socket: WebSocket) -> BeamResult<()> {
        let (ws_sender, ws_receiver) = socket.split();
        self.run(ws_sender, ws_receiver).await
    }

    /// Connection lifecycle over the two halves of a socket
    pub(crate) async fn run<S, R, E>(&self, mut ws_sender: S, ws_receiver: R) -> BeamResult<()>
    where
        S: Sink<Message> + Unpin,
        S::Error: fmt::Display,
        R: Stream<Item = Result<Message, E>> + Unpin + Send + 'static,
        E: Send + 'static,
    {
        let (queue_tx, mut queue_rx) =
            mpsc::channel::<PreparedMessage>(self.beam.config().buffer_size());
        let Some(mut registration) = self
            .beam
            .registry()
            .register(Peer::new(self.addr.as_str(), queue_tx))
        else {
            return Err(BeamError::ConnectionClosed {
                reason: String::from("peer id already registered"),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        self.beam.metrics().connection_established();
        self.log(format_args!("Connected"));

        // Fires once when the client goes away
        let (done_tx, mut done_rx) = oneshot::channel::<()>();
        let liveness = AbortOnDrop(tokio::spawn(watch_for_close(ws_receiver, done_tx)));

        let result = loop {
            tokio::select! {
                message = queue_rx.recv() => {
                    let Some(message) = message else {
                        break Ok(());
                    };

                    if let Err(e) = ws_sender.send(message.to_frame()).await {
                        self.log(format_args!("Failed writing to connection: {e}"));
                        break Err(BeamError::ConnectionClosed {
                            reason: format!("write failed: {e}"),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }

                    self.beam.metrics().message_written();
                }

                _ = &mut done_rx => {
                    self.log(format_args!("Client closed connection"));
                    break Ok(());
                }
            }
        };

        // Cleanup
        registration.release();
        drop(liveness);
        let _ = tokio::time::timeout(CLOSE_TIMEOUT, ws_sender.close()).await;

        self.beam
            .metrics()
            .connection_closed(if result.is_ok() { "normal" } else { "error" });
        self.log(format_args!("Disconnected"));

        result
    }

    fn log(&self, message: fmt::Arguments<'_>) {
        self.beam.log_peer(&self.addr, message);
    }
}

/// Aborts the liveness reader when the connection task ends, unwinding
/// included, so the read half never outlives the registration.
struct AbortOnDrop(JoinHandle<()>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Read and discard client messages. The client never sends anything we
/// use; reading is only how a close or a broken socket is noticed.
async fn watch_for_close<R, E>(mut receiver: R, done: oneshot::Sender<()>)
where
    R: Stream<Item = Result<Message, E>> + Unpin,
{
    while let Some(Ok(message)) = receiver.next().await {
        if let Message::Close(_) = message {
            break;
        }
    }

    let _ = done.send(());
}
