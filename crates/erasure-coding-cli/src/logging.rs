//! Logging setup.

use tracing_subscriber::EnvFilter;

/// The filter to use when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to stderr, so stdout stays clean.
pub fn init() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
