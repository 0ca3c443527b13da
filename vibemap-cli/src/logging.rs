//! Diagnostic output for the binary.
//!
//! The library crates log through the `log` facade; the subscriber installed
//! here bridges those records and writes them to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `vibemap_scorer=debug`.
pub(crate) const LOG_ENV: &str = "VIBEMAP_LOG";

/// Filter applied when `VIBEMAP_LOG` is unset or invalid.
pub(crate) const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the stderr subscriber. Later calls are no-ops.
pub(crate) fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init();
    if let Err(err) = installed {
        tracing::debug!("keeping existing subscriber: {err}");
    }
}
