//! Lambda Gateway SDK - Types and utilities for writing API-gateway cloud function handlers
//!
//! This crate provides the request/response envelope, the handler trait and
//! the runtime adapter that connects a handler to the hosting platform.

pub mod config;
pub mod context;
pub mod error;
pub mod handler;
pub mod logging;
pub mod request;
pub mod response;
pub mod runtime;

pub mod prelude {
    //! Common imports for function handlers
    pub use crate::context::ExecutionContext;
    pub use crate::error::HandlerError;
    pub use crate::handler::{handler_fn, Handler};
    pub use crate::request::InboundRequest;
    pub use crate::response::OutboundResponse;
    pub use crate::runtime;
}

// Re-export key types at crate root
pub use context::ExecutionContext;
pub use error::HandlerError;
pub use handler::Handler;
pub use request::InboundRequest;
pub use response::OutboundResponse;
