//! Function entry point registered with the hosting runtime.

use anyhow::Result;
use lambda_gateway_sdk::handler::handler_fn;
use lambda_gateway_sdk::runtime;

fn main() -> Result<()> {
    runtime::start(handler_fn(current_dir_handler::handle)).map_err(anyhow::Error::msg)
}
