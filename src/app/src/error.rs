use serde::{Deserialize, Serialize};

/// Why a request to the device did not produce the expected result.
///
/// Carried inside response events, hence serializable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Input rejected locally, nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Network unreachable or the request could not be performed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The device answered with a non-2xx status.
    #[error("Device rejected request: HTTP {status}")]
    Rejected { status: u16 },

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl RequestError {
    /// The request never got an answer from the device.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
