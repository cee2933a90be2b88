use beam_ws::SendReport;

use serde::{Deserialize, Serialize};

/// Body of a 202 from `POST /broadcast`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResponse {
    pub queued: usize,
    pub dropped: usize,
}

impl From<&SendReport> for PublishResponse {
    fn from(report: &SendReport) -> Self {
        Self {
            queued: report.queued,
            dropped: report.dropped_count(),
        }
    }
}
