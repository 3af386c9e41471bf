//! Abstract interface for fetching archived raw telemetry objects.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;
use bytes::Bytes;

/// Marker trait for blob store errors.
pub trait BlobStoreError: Error + Send + Sync + 'static {}

/// A trait representing the raw-telemetry object store (S3 in production).
#[async_trait]
pub trait BlobStore
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the store.
    type Error: BlobStoreError;

    /// Fetches one raw telemetry object by path.
    async fn fetch_object(&self, path: &str) -> Result<Bytes, Self::Error>;
}
