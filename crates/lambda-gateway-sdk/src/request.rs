//! API-gateway proxy request representation for handlers

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// An incoming API-gateway proxy event.
///
/// The gateway sends `null` for absent maps, so every map field accepts
/// either an object or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    #[serde(default)]
    pub http_method: String,

    /// Request path (e.g., "/items/123")
    #[serde(default)]
    pub path: String,

    /// Resource template matched by the gateway (e.g., "/items/{id}")
    #[serde(default)]
    pub resource: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub query_string_parameters: HashMap<String, String>,

    /// Path parameters extracted from the resource template
    #[serde(default, deserialize_with = "null_as_default")]
    pub path_parameters: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub stage_variables: HashMap<String, String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub request_context: RequestContext,

    /// Request body, base64 encoded when `is_base64_encoded` is set
    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub is_base64_encoded: bool,
}

/// Gateway-side metadata about the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// Gateway request ID, distinct from the function invocation ID
    #[serde(default)]
    pub request_id: Option<String>,

    #[serde(default)]
    pub stage: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_gateway_event() {
        let event = json!({
            "resource": "/{proxy+}",
            "path": "/hello",
            "httpMethod": "POST",
            "headers": {"Content-Type": "application/json"},
            "queryStringParameters": null,
            "pathParameters": {"proxy": "hello"},
            "stageVariables": null,
            "requestContext": {"requestId": "gw-123", "stage": "prod", "accountId": "1"},
            "body": "{\"name\":\"x\"}",
            "isBase64Encoded": false
        });

        let req: InboundRequest = serde_json::from_value(event).unwrap();
        assert_eq!(req.http_method, "POST");
        assert_eq!(req.path, "/hello");
        assert!(req.query_string_parameters.is_empty());
        assert!(req.stage_variables.is_empty());
        assert_eq!(req.path_parameters.get("proxy").map(String::as_str), Some("hello"));
        assert_eq!(req.request_context.request_id.as_deref(), Some("gw-123"));
        assert_eq!(req.body.as_deref(), Some("{\"name\":\"x\"}"));
    }

    #[test]
    fn test_empty_event_uses_defaults() {
        let req: InboundRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, InboundRequest::default());
    }
}
