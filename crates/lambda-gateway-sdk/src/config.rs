//! Runtime configuration

use std::env;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Tracing filter directive (e.g. "info" or "current_dir_handler=debug")
    pub log_filter: String,

    /// Name the platform deployed the function under
    pub function_name: Option<String>,
}

impl RuntimeConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("RUST_LOG")
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                lookup("AWS_LAMBDA_LOG_LEVEL")
                    .filter(|s| !s.trim().is_empty())
                    .map(|level| level.to_lowercase())
            })
            .unwrap_or_else(|| "info".to_string());

        Self {
            log_filter,
            function_name: lookup("AWS_LAMBDA_FUNCTION_NAME"),
        }
    }
}
