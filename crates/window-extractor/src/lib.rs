//! Abstract interface for extracting a time window from operator text.
//!
//! The extraction mechanics (a language-model service in production) stay
//! external; only the contract lives here.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker trait for window extractor errors.
pub trait WindowExtractorError: Error + Send + Sync + 'static {}

/// A UTC time window plus a flag saying whether the question needs the raw
/// telemetry batches behind the summaries.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TimeWindow {
    /// Window start, inclusive.
    pub start: DateTime<Utc>,

    /// Window end, inclusive.
    pub end: DateTime<Utc>,

    /// Whether raw telemetry objects should be pulled for this question.
    pub needs_raw_logs: bool,
}

/// A trait representing the time-window extraction service.
#[async_trait]
pub trait WindowExtractor
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the extractor.
    type Error: WindowExtractorError;

    /// Extracts a time window from free-form text. Returns `None` when no
    /// date can be found in the text.
    async fn extract(&self, text: &str) -> Result<Option<TimeWindow>, Self::Error>;
}
