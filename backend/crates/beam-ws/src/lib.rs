//! Real-time WebSocket fan-out.
//!
//! A [`Beam`] accepts many long-lived WebSocket clients through [`handler`]
//! and pushes every payload given to [`Beam::send`] to all of them. Each
//! peer has its own bounded queue; a peer that cannot keep up loses messages
//! instead of slowing anyone else down.

pub mod beam;
pub mod beam_config;
pub mod beam_options;
pub mod error;
pub mod frame_kind;
pub mod handler;
pub mod log_sink;
pub mod metrics;
pub mod offer_outcome;
pub mod peer;
pub mod peer_connection;
pub mod peer_id;
pub mod peer_registration;
pub mod peer_registry;
pub mod prepared_message;
pub mod send_report;
pub mod upgrade_policy;

pub use beam::Beam;
pub use beam_config::{BeamConfig, DEFAULT_BUFFER_SIZE, MAX_BUFFER_SIZE, MIN_BUFFER_SIZE};
pub use beam_options::BeamOptions;
pub use error::{BeamError, BeamResult};
pub use frame_kind::FrameKind;
pub use handler::{UNKNOWN_ADDR, handler};
pub use log_sink::{LogCrateSink, LogSink};
pub use metrics::Metrics;
pub use offer_outcome::OfferOutcome;
pub use peer::Peer;
pub use peer_connection::PeerConnection;
pub use peer_id::PeerId;
pub use peer_registration::PeerRegistration;
pub use peer_registry::PeerRegistry;
pub use prepared_message::PreparedMessage;
pub use send_report::SendReport;
pub use upgrade_policy::UpgradePolicy;

#[cfg(test)]
mod tests;
