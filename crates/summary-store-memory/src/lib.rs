//! An in-memory implementation of the summary/chat-log store. Used for
//! testing and local runs.
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::sync::Arc;

use async_trait::async_trait;
use fleet_summary_store::{ChatLog, SummaryStore, TelemetrySummary};
use tokio::sync::Mutex;

mod error;
pub use error::Error;

/// An in-memory implementation of the `SummaryStore` trait.
#[derive(Clone, Debug, Default)]
pub struct MemorySummaryStore {
    summaries: Arc<Mutex<Vec<TelemetrySummary>>>,
    chat_logs: Arc<Mutex<Vec<ChatLog>>>,
}

impl MemorySummaryStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one summary.
    pub async fn insert_summary(&self, summary: TelemetrySummary) {
        self.summaries.lock().await.push(summary);
    }
}

#[async_trait]
impl SummaryStore for MemorySummaryStore {
    type Error = Error;

    async fn summaries(
        &self,
        start_unix: i64,
        end_unix: i64,
    ) -> Result<Vec<TelemetrySummary>, Self::Error> {
        Ok(self
            .summaries
            .lock()
            .await
            .iter()
            .filter(|summary| summary.end_time >= start_unix && summary.start_time <= end_unix)
            .cloned()
            .collect())
    }

    async fn insert_chat_log(&self, log: ChatLog) -> Result<(), Self::Error> {
        self.chat_logs.lock().await.push(log);
        Ok(())
    }

    async fn recent_chat_logs(&self, limit: usize) -> Result<Vec<ChatLog>, Self::Error> {
        let mut logs = self.chat_logs.lock().await.clone();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        logs.truncate(limit);
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use serde_json::json;

    use super::*;

    fn summary(start_time: i64, end_time: i64) -> TelemetrySummary {
        TelemetrySummary {
            start_time,
            end_time,
            threat_count: 1,
            unhealthy_count: 0,
            reasons: json!(["fan stall"]),
            s3_path: None,
        }
    }

    #[tokio::test]
    async fn test_summaries_overlap_query_is_inclusive() {
        let store = MemorySummaryStore::new();
        store.insert_summary(summary(0, 100)).await;
        store.insert_summary(summary(100, 200)).await;
        store.insert_summary(summary(300, 400)).await;

        let hits = store.summaries(100, 250).await.unwrap();

        // A batch ending exactly at the window start still counts.
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].end_time, 100);
        assert_eq!(hits[1].start_time, 100);
    }

    #[tokio::test]
    async fn test_disjoint_batches_are_excluded() {
        let store = MemorySummaryStore::new();
        store.insert_summary(summary(0, 50)).await;

        let hits = store.summaries(51, 60).await.unwrap();

        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_recent_chat_logs_newest_first_with_limit() {
        let store = MemorySummaryStore::new();
        let base = Utc::now();
        for age_minutes in [30, 10, 20] {
            store
                .insert_chat_log(ChatLog {
                    timestamp: base - Duration::minutes(age_minutes),
                    user_message: format!("{age_minutes} minutes ago"),
                    ai_response: String::new(),
                    range_start: base,
                    range_end: base,
                    s3_used: false,
                })
                .await
                .unwrap();
        }

        let logs = store.recent_chat_logs(2).await.unwrap();

        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].user_message, "10 minutes ago");
        assert_eq!(logs[1].user_message, "20 minutes ago");
    }
}
