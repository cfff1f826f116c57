//! The handler seam between the runtime adapter and function code
//!
//! Function crates implement [`Handler`] on their own type, or wrap a plain
//! function with [`handler_fn`].
//!
//! # Example
//!
//! ```ignore
//! use lambda_gateway_sdk::prelude::*;
//!
//! fn hello(_req: &InboundRequest, _ctx: &ExecutionContext) -> OutboundResponse {
//!     OutboundResponse::new(200, "Hello, World!")
//! }
//!
//! lambda_gateway_sdk::runtime::start(handler_fn(hello))
//! ```

use crate::{ExecutionContext, InboundRequest, OutboundResponse};

/// A synchronous request handler.
///
/// Implementations must always produce a response; failures are expressed as
/// error responses rather than panics.
pub trait Handler: Send + Sync {
    fn handle(&self, request: &InboundRequest, ctx: &ExecutionContext) -> OutboundResponse;
}

/// Adapter that turns a plain function into a [`Handler`].
#[derive(Debug, Clone, Copy)]
pub struct HandlerFn<F> {
    f: F,
}

/// Wrap a function so it can be passed to the runtime.
pub fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&InboundRequest, &ExecutionContext) -> OutboundResponse + Send + Sync,
{
    HandlerFn { f }
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&InboundRequest, &ExecutionContext) -> OutboundResponse + Send + Sync,
{
    fn handle(&self, request: &InboundRequest, ctx: &ExecutionContext) -> OutboundResponse {
        (self.f)(request, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo_path(req: &InboundRequest, ctx: &ExecutionContext) -> OutboundResponse {
        OutboundResponse::new(200, format!("{} {}", ctx.request_id, req.path))
    }

    #[test]
    fn test_handler_fn() {
        let handler = handler_fn(echo_path);
        let req = InboundRequest {
            path: "/a".to_string(),
            ..Default::default()
        };
        let ctx = ExecutionContext {
            request_id: "r1".to_string(),
            ..Default::default()
        };
        assert_eq!(handler.handle(&req, &ctx).body, "r1 /a");
    }
}
