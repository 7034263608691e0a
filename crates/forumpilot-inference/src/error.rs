use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("inference request timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("inference API returned {status}")]
    Upstream { status: u16 },

    #[error("malformed inference response: {0}")]
    MalformedResponse(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl InferenceError {
    /// Upstream status code, if the failure came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status } => Some(*status),
            _ => None,
        }
    }
}
