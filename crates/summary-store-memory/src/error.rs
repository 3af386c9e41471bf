use std::fmt;

use fleet_summary_store::SummaryStoreError;

/// Error type for the in-memory summary store.
#[derive(Debug)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "memory summary store error")
    }
}

impl std::error::Error for Error {}
impl SummaryStoreError for Error {}
