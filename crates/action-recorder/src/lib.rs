//! Abstract interface for recording control actions taken against the fleet.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker trait for action recorder errors.
pub trait ActionRecorderError: Error + Send + Sync + 'static {}

/// An immutable audit entry for one control action taken against a chassis.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ActionRecord {
    /// When the action completed, UTC.
    pub timestamp: DateTime<Utc>,

    /// Who performed the action (e.g. `"agent"`).
    pub actor: String,

    /// Full URL of the control endpoint that was called.
    pub endpoint: String,

    /// Request payload sent to the control endpoint.
    pub payload: Value,

    /// Raw response returned by the control endpoint.
    pub response: Value,
}

/// A trait representing an append-only sink for action audit records.
///
/// Implementations serialize their own writes; callers may record from many
/// in-flight tasks without external coordination.
#[async_trait]
pub trait ActionRecorder
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the recorder.
    type Error: ActionRecorderError;

    /// Appends one record. Records are never mutated after this call.
    async fn record(&self, record: ActionRecord) -> Result<(), Self::Error>;
}
