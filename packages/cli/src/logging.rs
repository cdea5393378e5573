// ABOUTME: Tracing subscriber setup for the prd-studio binary
// ABOUTME: Logs go to stderr so generated documents on stdout stay clean

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Pick the log filter: RUST_LOG first, then the configured fallback, then "warn"
pub fn resolve_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_tracing(fallback: Option<&str>) {
    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(fallback))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
