use crate::{BeamError, BeamResult};

use std::str::FromStr;

/// WebSocket frame type used for every outgoing message of a beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameKind {
    #[default]
    Text,
    Binary,
}

impl FrameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
        }
    }
}

impl FromStr for FrameKind {
    type Err = BeamError;

    fn from_str(s: &str) -> BeamResult<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "binary" => Ok(Self::Binary),
            other => Err(BeamError::invalid_config(format!(
                "frame kind must be 'text' or 'binary', got '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
