//! Diagnostics via `tracing`, written to stderr.
//!
//! Operator-facing outcomes are `CmdMessage`s printed to stdout; this is only
//! for what happens underneath (skipped lines, dropped references, file paths).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Reads `RUST_LOG`, defaulting to `warn`. `--verbose` forces `debug` for
/// this crate.
pub(super) fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shelter=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
