#![allow(dead_code)]

use beam_server::build_router;
use beam_ws::{Beam, BeamOptions};

use axum_test::TestServer;
use tokio::time::{Duration, Instant, sleep};

pub struct TestApp {
    pub server: TestServer,
    pub beam: Beam,
}

/// Full router over a real HTTP transport, broadcaster logging disabled
pub fn create_test_app() -> TestApp {
    let config = BeamOptions::new()
        .without_logger()
        .build()
        .expect("Beam options should be valid");
    let beam = Beam::new(config);

    let server = TestServer::builder()
        .http_transport()
        .build(build_router(beam.clone()))
        .expect("Failed to create test server");

    TestApp { server, beam }
}

/// Poll until the beam reports `expected` peers. Returns false on timeout.
pub async fn wait_for_peer_count(beam: &Beam, expected: usize) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if beam.peer_count() == expected {
            return true;
        }
        sleep(Duration::from_millis(10)).await;
    }
    beam.peer_count() == expected
}
