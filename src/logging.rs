//! Tracing initialization for the command-line front end
//!
//! Logs go to stderr so they never mix with command output on stdout.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "skillrepos=debug" } else { "warn" }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(verbose: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let result = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt_layer)
        .try_init();

    if let Err(err) = result {
        tracing::debug!(error = %err, "tracing already initialized");
    }
}
