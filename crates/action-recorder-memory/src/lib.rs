//! An in-memory implementation of the action recorder. Used for testing and
//! local runs.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::sync::Arc;

use async_trait::async_trait;
use fleet_action_recorder::{ActionRecord, ActionRecorder};
use tokio::sync::Mutex;

mod error;
pub use error::Error;

/// An in-memory implementation of the `ActionRecorder` trait.
#[derive(Clone, Debug, Default)]
pub struct MemoryActionRecorder {
    records: Arc<Mutex<Vec<ActionRecord>>>,
}

impl MemoryActionRecorder {
    /// Creates a new instance of `MemoryActionRecorder`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a copy of everything recorded so far, in append order.
    pub async fn records(&self) -> Vec<ActionRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl ActionRecorder for MemoryActionRecorder {
    type Error = Error;

    async fn record(&self, record: ActionRecord) -> Result<(), Self::Error> {
        self.records.lock().await.push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    fn sample(endpoint: &str) -> ActionRecord {
        ActionRecord {
            timestamp: Utc::now(),
            actor: "agent".to_string(),
            endpoint: endpoint.to_string(),
            payload: json!({"Fan1": 20}),
            response: json!({"status": "ok"}),
        }
    }

    #[tokio::test]
    async fn test_records_preserve_append_order() {
        let recorder = MemoryActionRecorder::new();
        recorder.record(sample("first")).await.unwrap();
        recorder.record(sample("second")).await.unwrap();

        let records = recorder.records().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].endpoint, "first");
        assert_eq!(records[1].endpoint, "second");
    }

    #[tokio::test]
    async fn test_clones_share_the_sink() {
        let recorder = MemoryActionRecorder::new();
        let handle = recorder.clone();
        handle.record(sample("shared")).await.unwrap();

        assert_eq!(recorder.records().await.len(), 1);
    }
}
