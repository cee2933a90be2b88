use crate::{ServerError, build_beam_config};

use beam_config::BeamSettings;
use beam_ws::{BeamError, FrameKind};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok, some};

#[test]
fn given_default_settings_when_built_then_default_beam_config() {
    // Given
    let settings = BeamSettings::default();

    // When
    let config = build_beam_config(&settings).unwrap();

    // Then
    assert_that!(config.buffer_size(), eq(100));
    assert_that!(config.frame_kind(), eq(FrameKind::Text));
    assert!(config.logger().is_some());
    assert!(config.headers().is_empty());
}

#[test]
fn given_binary_frame_and_headers_when_built_then_carried_over() {
    // Given
    let mut settings = BeamSettings {
        buffer_size: 8,
        frame: "binary".to_string(),
        max_message_size: Some(1 << 20),
        max_frame_size: Some(1 << 16),
        ..Default::default()
    };
    settings
        .headers
        .insert("x-beam-node".to_string(), "node-1".to_string());

    // When
    let config = build_beam_config(&settings).unwrap();

    // Then
    assert_that!(config.buffer_size(), eq(8));
    assert_that!(config.frame_kind(), eq(FrameKind::Binary));
    assert_that!(config.upgrade_policy().max_message_size, some(eq(1 << 20)));
    assert_that!(config.upgrade_policy().max_frame_size, some(eq(1 << 16)));
    assert_that!(
        config.headers().get("x-beam-node").and_then(|v| v.to_str().ok()),
        some(eq("node-1"))
    );
}

#[test]
fn given_log_connections_off_when_built_then_no_logger() {
    let settings = BeamSettings {
        log_connections: false,
        ..Default::default()
    };

    let config = build_beam_config(&settings).unwrap();

    assert!(config.logger().is_none());
}

#[test]
fn given_unknown_frame_when_built_then_beam_error() {
    let settings = BeamSettings {
        frame: "ping".to_string(),
        ..Default::default()
    };

    let result = build_beam_config(&settings);

    assert!(matches!(
        result,
        Err(ServerError::Beam(BeamError::InvalidConfig { .. }))
    ));
}

#[test]
fn given_invalid_header_name_when_built_then_config_error() {
    let mut settings = BeamSettings::default();
    settings
        .headers
        .insert("bad header".to_string(), "x".to_string());

    let result = build_beam_config(&settings);

    assert!(matches!(result, Err(ServerError::Config(_))));
}

#[test]
fn given_zero_buffer_when_built_then_error() {
    let settings = BeamSettings {
        buffer_size: 0,
        ..Default::default()
    };

    assert_that!(build_beam_config(&settings), err(anything()));
}

#[test]
fn given_valid_settings_when_built_then_ok() {
    let settings = BeamSettings {
        buffer_size: 1,
        ..Default::default()
    };

    assert_that!(build_beam_config(&settings), ok(anything()));
}
