use std::io;

use lambda_gateway_sdk::HandlerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkdirError {
    /// The platform could not report the working directory, e.g. because it
    /// was removed or access to it was denied.
    #[error("Error obtaining the current directory: {0}")]
    Unavailable(#[source] io::Error),
}

impl From<WorkdirError> for HandlerError {
    fn from(err: WorkdirError) -> Self {
        HandlerError::Internal(err.to_string())
    }
}
