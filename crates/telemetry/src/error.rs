use reqwest::StatusCode;
use thiserror::Error;

/// Result type for telemetry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A single discovery or sub-resource call failure.
#[derive(Debug, Error)]
pub enum CallError {
    /// The request could not be sent or the response body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Error type for telemetry aggregation.
#[derive(Debug, Error)]
pub enum Error {
    /// The chassis directory request failed.
    #[error("chassis discovery failed: {0}")]
    Discovery(#[source] CallError),

    /// A directory member carried neither an `Id` nor an `@odata.id`, so no
    /// identifier could be derived for it.
    #[error("chassis collection member has neither Id nor @odata.id")]
    MemberWithoutId,

    /// One or more of a chassis's three sub-resource calls failed.
    #[error("telemetry fetch failed for chassis {id}: {cause}")]
    ChassisFetch {
        /// The chassis whose fetch failed.
        id: String,

        /// The underlying call failure.
        #[source]
        cause: CallError,
    },

    /// A fleet-wide aggregation failed; wraps the first per-chassis failure
    /// in directory order.
    #[error("fleet aggregation failed at chassis {failed_id}: {cause}")]
    Aggregation {
        /// The first chassis (in directory order) whose fetch failed.
        failed_id: String,

        /// The underlying call failure.
        #[source]
        cause: CallError,
    },
}
