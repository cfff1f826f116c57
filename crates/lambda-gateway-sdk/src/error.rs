//! Error types for cloud function handlers

use thiserror::Error;

/// Errors that can occur in a handler
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The message is passed through to the response body unchanged.
    #[error("{0}")]
    Internal(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Internal(_) => 500,
        }
    }

    /// Convert to a response carrying the error message as its body
    pub fn to_response(&self) -> crate::OutboundResponse {
        crate::OutboundResponse::new(self.status_code(), self.to_string())
    }
}

impl From<HandlerError> for crate::OutboundResponse {
    fn from(err: HandlerError) -> Self {
        err.to_response()
    }
}
