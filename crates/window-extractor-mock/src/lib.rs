//! A mock implementation of the window extractor. Used for testing.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::sync::Arc;

use async_trait::async_trait;
use fleet_window_extractor::{TimeWindow, WindowExtractor};
use tokio::sync::Mutex;

mod error;
pub use error::Error;

/// A mock implementation of the `WindowExtractor` trait. Returns a
/// preconfigured window regardless of the text, or `None` when unset.
#[derive(Clone, Debug, Default)]
pub struct MockWindowExtractor {
    window: Arc<Mutex<Option<TimeWindow>>>,
}

impl MockWindowExtractor {
    /// Creates a new instance of `MockWindowExtractor` with no window set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: Arc::new(Mutex::new(None)),
        }
    }

    /// Sets the window every subsequent `extract` call will return.
    pub async fn set_window(&self, window: TimeWindow) {
        *self.window.lock().await = Some(window);
    }
}

#[async_trait]
impl WindowExtractor for MockWindowExtractor {
    type Error = Error;

    async fn extract(&self, _text: &str) -> Result<Option<TimeWindow>, Self::Error> {
        Ok(*self.window.lock().await)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[tokio::test]
    async fn test_extract_without_window_is_none() {
        let extractor = MockWindowExtractor::new();

        let window = extractor.extract("yesterday?").await.unwrap();

        assert!(window.is_none());
    }

    #[tokio::test]
    async fn test_extract_returns_configured_window() {
        let extractor = MockWindowExtractor::new();
        let window = TimeWindow {
            start: Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 7, 1, 23, 59, 59).unwrap(),
            needs_raw_logs: true,
        };
        extractor.set_window(window).await;

        let extracted = extractor.extract("what happened on July 1?").await.unwrap();

        assert_eq!(extracted, Some(window));
    }
}
