//! Abstract interface for the telemetry summary and chat-log document store.
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

/// Marker trait for summary store errors.
pub trait SummaryStoreError: Error + Send + Sync + 'static {}

/// One persisted telemetry batch summary.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TelemetrySummary {
    /// Batch start, Unix seconds.
    pub start_time: i64,

    /// Batch end, Unix seconds.
    pub end_time: i64,

    /// Threats detected in the batch.
    pub threat_count: u64,

    /// Chassis flagged unhealthy in the batch.
    pub unhealthy_count: u64,

    /// Free-form reasons document.
    pub reasons: Value,

    /// Object path of the raw telemetry batch, when one was archived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_path: Option<String>,
}

/// One persisted chat exchange.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ChatLog {
    /// When the exchange happened, UTC.
    pub timestamp: DateTime<Utc>,

    /// The operator's question.
    pub user_message: String,

    /// The reply that was produced.
    pub ai_response: String,

    /// Start of the time window the question resolved to.
    pub range_start: DateTime<Utc>,

    /// End of the time window the question resolved to.
    pub range_end: DateTime<Utc>,

    /// Whether raw telemetry objects were pulled for the reply.
    pub s3_used: bool,
}

/// A trait representing the summary/chat-log document store.
#[async_trait]
pub trait SummaryStore
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the store.
    type Error: SummaryStoreError;

    /// Returns every summary overlapping `[start_unix, end_unix]`, i.e.
    /// those with `end_time >= start_unix && start_time <= end_unix`.
    async fn summaries(
        &self,
        start_unix: i64,
        end_unix: i64,
    ) -> Result<Vec<TelemetrySummary>, Self::Error>;

    /// Appends one chat exchange.
    async fn insert_chat_log(&self, log: ChatLog) -> Result<(), Self::Error>;

    /// Returns up to `limit` of the most recent chat exchanges, newest
    /// first.
    async fn recent_chat_logs(&self, limit: usize) -> Result<Vec<ChatLog>, Self::Error>;
}
