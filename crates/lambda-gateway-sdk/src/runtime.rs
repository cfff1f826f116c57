//! Adapter between handlers and the hosting function runtime.
//!
//! The platform delivers API-gateway proxy events as JSON; the runtime
//! deserializes each one into an [`InboundRequest`], converts the invocation
//! metadata into an [`ExecutionContext`], calls the handler and serializes the
//! returned [`OutboundResponse`] back.
//!
//! # Example
//! ```ignore
//! use lambda_gateway_sdk::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     runtime::start(MyHandler::default()).map_err(anyhow::Error::msg)
//! }
//! ```

use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};

use crate::config::RuntimeConfig;
use crate::handler::Handler;
use crate::{logging, ExecutionContext, InboundRequest, OutboundResponse};

pub use lambda_runtime::Error;

/// Run a single invocation and log its outcome.
pub fn dispatch<H>(handler: &H, request: &InboundRequest, ctx: &ExecutionContext) -> OutboundResponse
where
    H: Handler + ?Sized,
{
    let span = tracing::info_span!(
        "invocation",
        request_id = %ctx.request_id,
        method = %request.http_method,
        path = %request.path
    );
    let _enter = span.enter();

    let response = handler.handle(request, ctx);
    tracing::info!(status = response.status_code, "invocation complete");
    response
}

/// Serve invocations from the hosting runtime until it shuts the process down.
pub async fn run<H>(handler: H) -> Result<(), Error>
where
    H: Handler + 'static,
{
    let handler = Arc::new(handler);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<InboundRequest>| {
        let handler = Arc::clone(&handler);
        async move {
            let LambdaEvent { payload, context } = event;
            let ctx = ExecutionContext::from(context);
            Ok::<_, Error>(dispatch(handler.as_ref(), &payload, &ctx))
        }
    }))
    .await
}

/// Process entry point: load config, set up logging and block on [`run`].
pub fn start<H>(handler: H) -> Result<(), Error>
where
    H: Handler + 'static,
{
    let config = RuntimeConfig::from_env();
    logging::init(&config);

    tracing::info!(
        function = config.function_name.as_deref().unwrap_or("unnamed"),
        "Starting function runtime"
    );

    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(run(handler));
    if let Err(e) = &result {
        tracing::error!(error = %e, "Function runtime exited");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::handler_fn;

    #[test]
    fn test_dispatch_returns_handler_response() {
        let handler = handler_fn(|req: &InboundRequest, _ctx: &ExecutionContext| {
            OutboundResponse::new(418, req.http_method.clone())
        });
        let req = InboundRequest {
            http_method: "BREW".to_string(),
            ..Default::default()
        };

        let response = dispatch(&handler, &req, &ExecutionContext::default());
        assert_eq!(response, OutboundResponse::new(418, "BREW"));
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let handler: Box<dyn Handler> = Box::new(handler_fn(
            |_req: &InboundRequest, ctx: &ExecutionContext| OutboundResponse::new(200, ctx.request_id.clone()),
        ));
        let ctx = ExecutionContext {
            request_id: "abc".to_string(),
            ..Default::default()
        };

        let response = dispatch(handler.as_ref(), &InboundRequest::default(), &ctx);
        assert_eq!(response.body, "abc");
    }
}
