//! Structured logging through `tracing`.
//!
//! Events go to stderr so stdout stays clean for search results and JSON
//! output. `RUST_LOG` wins over the configured level when it is set.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Call once, early in `main`.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = build_env_filter(level)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))
}

fn build_env_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(format!("warn,edufinder={level}"))
        .map_err(|err| anyhow!("invalid log level '{level}': {err}"))
}
