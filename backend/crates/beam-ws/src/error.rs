use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Failed serializing payload: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid beam configuration: {message} {location}")]
    InvalidConfig {
        message: String,
        location: ErrorLocation,
    },

    #[error("WebSocket upgrade failed: {message} {location}")]
    Upgrade {
        message: String,
        location: ErrorLocation,
    },

    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },
}

impl BeamError {
    /// Create a configuration error
    #[track_caller]
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code, used in HTTP error bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Serialization { .. } => "SERIALIZATION_ERROR",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
            Self::Upgrade { .. } => "UPGRADE_FAILED",
            Self::ConnectionClosed { .. } => "CONNECTION_CLOSED",
        }
    }
}

pub type BeamResult<T> = std::result::Result<T, BeamError>;
