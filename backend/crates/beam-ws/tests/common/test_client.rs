#![allow(dead_code)]

use crate::common::test_server::{TestServerWithBeam, wait_for_peer_count};

use axum_test::{TestServer, TestWebSocket, WsMessage};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tokio::time::{Duration, timeout};

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to the beam endpoint
    pub async fn connect(server: &TestServer) -> Self {
        let ws = server
            .get_websocket("/ws")
            .await
            .into_websocket()
            .await;

        Self { ws }
    }

    /// Receive a text frame and decode it as JSON
    pub async fn receive_json<T: DeserializeOwned>(&mut self) -> T {
        let text = self.ws.receive_text().await;
        serde_json::from_str(&text).expect("Frame should contain JSON")
    }

    /// Receive binary message
    pub async fn receive_binary(&mut self) -> Bytes {
        self.ws.receive_bytes().await
    }

    /// Wait briefly for any frame; None when nothing arrived
    pub async fn try_receive(&mut self, wait: Duration) -> Option<WsMessage> {
        timeout(wait, self.ws.receive_message()).await.ok()
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Connect `count` clients and wait until the beam has registered all of them
pub async fn connect_clients(test_server: &TestServerWithBeam, count: usize) -> Vec<WsTestClient> {
    let already = test_server.beam.peer_count();
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(WsTestClient::connect(&test_server.server).await);
    }

    assert!(
        wait_for_peer_count(&test_server.beam, already + count).await,
        "Beam should register {} peers",
        already + count
    );
    clients
}
