use crate::logger::{install, plain_line};

use std::sync::mpsc;
use std::time::Duration;

use fern::Dispatch;
use log::LevelFilter;

// The only test in this crate that installs the global logger. Other tests
// may log concurrently, so the output only keeps records from this module.
#[test]
fn given_installed_logger_when_tracing_event_emitted_then_written_to_output() {
    // Given
    let (tx, rx) = mpsc::channel::<String>();
    let output = Dispatch::new()
        .filter(|metadata| metadata.target().starts_with(module_path!()))
        .format(|out, message, record| plain_line(out, message, record))
        .chain(tx);
    install(LevelFilter::Info, output).unwrap();

    // When
    tracing::info!("upgrade accepted by tower layer");
    log::debug!("below the configured level");

    // Then
    let line = rx.recv_timeout(Duration::from_secs(1)).unwrap();
    assert!(line.contains("INFO"), "unexpected line: {line}");
    assert!(line.contains("upgrade accepted by tower layer"));
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

    // A second logger cannot replace the installed one
    assert!(install(LevelFilter::Info, Dispatch::new()).is_err());
}
