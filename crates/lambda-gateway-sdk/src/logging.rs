//! Tracing subscriber setup for function processes

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::RuntimeConfig;

/// Install the global subscriber.
///
/// The platform's log sink timestamps every line itself, so the formatter
/// omits time and colour. Returns `false` if a subscriber was already set.
pub fn init(config: &RuntimeConfig) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(&config.log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .is_ok()
}

/// Parse a filter directive, falling back to `info` when it is malformed.
fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_filter_is_kept() {
        assert_eq!(
            env_filter("current_dir_handler=debug").to_string(),
            EnvFilter::new("current_dir_handler=debug").to_string()
        );
    }

    #[test]
    fn test_malformed_filter_falls_back_to_info() {
        assert!(EnvFilter::try_new("current_dir_handler=loud").is_err());
        assert_eq!(
            env_filter("current_dir_handler=loud").to_string(),
            EnvFilter::new("info").to_string()
        );
    }
}
