//! Logging infrastructure for the ssrpack CLI.
//!
//! Structured logging via the `tracing` ecosystem. Diagnostics go to stderr
//! so `show` can pipe its JSON output cleanly.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Call once at startup. The level is picked in this order: `--verbose`
/// (debug for ssrpack crates), `--quiet` (errors only), the `RUST_LOG`
/// environment variable, then info as the fallback.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("ssrpack=debug,ssrpack_config=debug,ssrpack_cli=debug")
    } else if quiet {
        EnvFilter::new("ssrpack=error,ssrpack_config=error,ssrpack_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ssrpack=info,ssrpack_config=info,ssrpack_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
