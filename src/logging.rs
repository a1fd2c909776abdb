// Subscriber setup for the binary
use std::io;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable, keeping logs out of the
/// conversation on stdout.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter from `RUST_LOG` directives, falling back to WARN.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a stderr fmt subscriber. Use RUST_LOG=info or RUST_LOG=debug for
/// verbose output.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter_from(directives.as_deref()))
        .init();
}
