//! API-gateway proxy response representation for handlers

use serde::{Deserialize, Serialize};

/// Represents an outgoing API-gateway proxy response.
///
/// Serializes to the envelope the gateway expects:
/// `{"statusCode": 200, "body": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundResponse {
    /// HTTP status code
    pub status_code: u16,

    #[serde(default)]
    pub body: String,
}

impl OutboundResponse {
    /// Create a response with the given status code and body.
    ///
    /// # Example
    /// ```ignore
    /// OutboundResponse::new(200, "Hello, World!")
    /// ```
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }
}
