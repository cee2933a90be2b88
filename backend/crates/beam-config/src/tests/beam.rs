use crate::{BeamSettings, MAX_BUFFER_SIZE, MIN_BUFFER_SIZE};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_settings_when_validate_then_ok() {
    let settings = BeamSettings::default();

    assert_that!(settings.validate(), ok(anything()));
}

#[test]
fn given_buffer_at_bounds_when_validate_then_ok() {
    for buffer_size in [MIN_BUFFER_SIZE, MAX_BUFFER_SIZE] {
        let settings = BeamSettings {
            buffer_size,
            ..Default::default()
        };

        assert_that!(settings.validate(), ok(anything()));
    }
}

#[test]
fn given_buffer_out_of_range_when_validate_then_error() {
    for buffer_size in [0, MAX_BUFFER_SIZE + 1] {
        let settings = BeamSettings {
            buffer_size,
            ..Default::default()
        };

        assert_that!(settings.validate(), err(anything()));
    }
}

#[test]
fn given_frame_names_when_validate_then_case_insensitive() {
    for frame in ["text", "Binary", "TEXT"] {
        let settings = BeamSettings {
            frame: frame.to_string(),
            ..Default::default()
        };

        assert_that!(settings.validate(), ok(anything()));
    }
}

#[test]
fn given_unknown_frame_when_validate_then_error() {
    let settings = BeamSettings {
        frame: "ping".to_string(),
        ..Default::default()
    };

    assert_that!(settings.validate(), err(anything()));
}

#[test]
fn given_empty_header_name_when_validate_then_error() {
    let mut settings = BeamSettings::default();
    settings.headers.insert(" ".to_string(), "x".to_string());

    assert_that!(settings.validate(), err(anything()));
}

#[test]
fn given_zero_limits_when_validate_then_error() {
    let message = BeamSettings {
        max_message_size: Some(0),
        ..Default::default()
    };
    let frame = BeamSettings {
        max_frame_size: Some(0),
        ..Default::default()
    };

    assert_that!(message.validate(), err(anything()));
    assert_that!(frame.validate(), err(anything()));
}

#[test]
fn given_frame_limit_above_message_limit_when_validate_then_error() {
    let settings = BeamSettings {
        max_message_size: Some(1024),
        max_frame_size: Some(2048),
        ..Default::default()
    };

    assert_that!(settings.validate(), err(anything()));
}
