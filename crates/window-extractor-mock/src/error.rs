use std::fmt;

use fleet_window_extractor::WindowExtractorError;

/// Error type for the mock window extractor.
#[derive(Debug)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mock extractor error")
    }
}

impl std::error::Error for Error {}
impl WindowExtractorError for Error {}
