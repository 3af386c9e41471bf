//! An in-memory implementation of the raw-telemetry object store. Used for
//! testing and local runs.
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use fleet_blob_store::{BlobStore, BlobStoreError};
use thiserror::Error;
use tokio::sync::Mutex;

/// Error type for the in-memory blob store.
#[derive(Debug, Error)]
pub enum Error {
    /// No object exists at the requested path.
    #[error("no object at {0}")]
    NotFound(String),
}

impl BlobStoreError for Error {}

/// An in-memory implementation of the `BlobStore` trait, keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MemoryBlobStore {
    objects: Arc<Mutex<HashMap<String, Bytes>>>,
}

impl MemoryBlobStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores one object under `path`.
    pub async fn put(&self, path: impl Into<String>, bytes: Bytes) {
        self.objects.lock().await.insert(path.into(), bytes);
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    type Error = Error;

    async fn fetch_object(&self, path: &str) -> Result<Bytes, Self::Error> {
        self.objects
            .lock()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| Error::NotFound(path.to_owned()))
    }
}
