use reqwest::StatusCode;
use thiserror::Error;

/// Result type for action dispatch.
pub type Result<T> = std::result::Result<T, Error>;

/// A control endpoint call failure.
#[derive(Debug, Error)]
pub enum CallError {
    /// The request could not be sent or the response body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Error type for action dispatch.
#[derive(Debug, Error)]
pub enum Error {
    /// The inbound payload carried a tag outside the closed action set.
    /// Rejected before any network call is attempted.
    #[error("unknown action type {tag:?}")]
    InvalidActionType {
        /// The offending tag (empty when the field was absent).
        tag: String,
    },

    /// The inbound payload had a known tag but an invalid shape.
    #[error("malformed action request: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The control endpoint call failed; nothing was recorded.
    #[error("control call to {endpoint} failed: {cause}")]
    Call {
        /// Full URL of the endpoint that was called.
        endpoint: String,

        /// The underlying call failure.
        #[source]
        cause: CallError,
    },

    /// The call succeeded but the audit record could not be appended.
    #[error("failed to record action: {0}")]
    Record(#[source] Box<dyn std::error::Error + Send + Sync>),
}
