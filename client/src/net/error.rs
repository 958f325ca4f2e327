//! Failure taxonomy for task API calls.
//!
//! Views collapse every variant into a single "fetch failed" condition; the
//! variants exist so diagnostic logs say which layer broke.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The body could not be decoded into the expected payload.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The request body could not be encoded.
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// Browser-only call made during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// True when the server rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}
