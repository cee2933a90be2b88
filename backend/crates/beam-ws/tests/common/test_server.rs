#![allow(dead_code)]

use beam_ws::{Beam, BeamOptions, LogSink};

use std::fmt;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{Router, routing::get};
use axum_test::TestServer;
use tokio::time::{Duration, Instant, sleep};

/// How long a test waits for the server to register or drop peers
pub const PEER_WAIT: Duration = Duration::from_secs(5);

/// Test server with access to the mounted Beam
pub struct TestServerWithBeam {
    pub server: TestServer,
    pub beam: Beam,
}

/// Beam log sink for tests: test output captures stdout per test
pub fn print_log_line(message: std::fmt::Arguments<'_>) {
    println!("{message}");
}

/// Beam log sink that keeps every line for assertions
#[derive(Clone, Default)]
pub struct LogLines {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogLines {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for LogLines {
    fn log(&self, message: fmt::Arguments<'_>) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Create a TestServer with default beam options
pub fn create_test_server() -> TestServerWithBeam {
    create_test_server_with_options(BeamOptions::new().logger(print_log_line))
}

/// Create a TestServer with custom beam options
pub fn create_test_server_with_options(options: BeamOptions) -> TestServerWithBeam {
    let config = options.build().expect("Beam options should be valid");
    let beam = Beam::new(config);

    let router = Router::new()
        .route("/ws", get(beam_ws::handler))
        .with_state(beam.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(router.into_make_service_with_connect_info::<SocketAddr>())
        .expect("Failed to create test server");

    TestServerWithBeam { server, beam }
}

/// Poll until the beam reports `expected` peers. Returns false on timeout.
pub async fn wait_for_peer_count(beam: &Beam, expected: usize) -> bool {
    let deadline = Instant::now() + PEER_WAIT;
    while Instant::now() < deadline {
        if beam.peer_count() == expected {
            return true;
        }
        sleep(Duration::from_millis(10)).await;
    }
    beam.peer_count() == expected
}
