//! Execution context handed to handlers alongside the request
//!
//! Carries the invocation metadata the hosting runtime knows about. Handlers
//! may ignore it entirely; the runtime uses the request ID for log correlation.

use serde::{Deserialize, Serialize};

/// Metadata about the current invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Invocation ID assigned by the runtime
    pub request_id: String,

    /// Invocation deadline in milliseconds since the Unix epoch (0 if unknown)
    pub deadline_ms: u64,

    pub invoked_function_arn: String,

    pub trace_id: Option<String>,
}

impl From<lambda_runtime::Context> for ExecutionContext {
    fn from(ctx: lambda_runtime::Context) -> Self {
        Self {
            request_id: ctx.request_id,
            deadline_ms: ctx.deadline,
            invoked_function_arn: ctx.invoked_function_arn,
            trace_id: ctx.xray_trace_id,
        }
    }
}
