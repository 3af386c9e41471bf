use std::fmt;

use fleet_action_recorder::ActionRecorderError;

/// Error type for the in-memory recorder.
#[derive(Debug)]
pub struct Error;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "memory recorder error")
    }
}

impl std::error::Error for Error {}
impl ActionRecorderError for Error {}
