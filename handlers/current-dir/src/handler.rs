//! Reports the name of the function's working directory.
//!
//! The request is never inspected: every invocation answers
//! `"The current directory is: <name>"` with status 200, or a 500 carrying the
//! lookup error when the directory cannot be resolved.

use lambda_gateway_sdk::prelude::*;

use crate::error::WorkdirError;
use crate::workdir::{base_name, ProcessWorkingDirectory, WorkingDirectory};

#[derive(Debug, Clone, Default)]
pub struct CurrentDirHandler<W = ProcessWorkingDirectory> {
    workdir: W,
}

impl CurrentDirHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: WorkingDirectory> CurrentDirHandler<W> {
    /// Use a custom working directory source.
    pub fn with_workdir(workdir: W) -> Self {
        Self { workdir }
    }

    /// Sentence naming the working directory.
    pub fn describe(&self) -> Result<String, WorkdirError> {
        let dir = self.workdir.current_dir().map_err(WorkdirError::Unavailable)?;
        Ok(format!("The current directory is: {}", base_name(&dir)))
    }
}

impl<W: WorkingDirectory> Handler for CurrentDirHandler<W> {
    fn handle(&self, _request: &InboundRequest, ctx: &ExecutionContext) -> OutboundResponse {
        match self.describe() {
            Ok(body) => OutboundResponse::new(200, body),
            Err(err) => {
                tracing::warn!(request_id = %ctx.request_id, error = %err, "Working directory lookup failed");
                HandlerError::from(err).into()
            }
        }
    }
}

/// Handle one invocation against the process's working directory.
pub fn handle(request: &InboundRequest, ctx: &ExecutionContext) -> OutboundResponse {
    CurrentDirHandler::new().handle(request, ctx)
}
