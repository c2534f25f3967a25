//! Logging setup for the bindle CLI.
//!
//! Structured logging via the `tracing` ecosystem: `--verbose` raises
//! bindle crates to debug level, `--quiet` drops everything below
//! errors, and `RUST_LOG` overrides the default filter.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber. Call once, before any
/// logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("bindle=debug,bindle_bundler=debug,bindle_graph=debug,bindle_cli=debug")
    } else if quiet {
        EnvFilter::new("bindle=error,bindle_bundler=error,bindle_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bindle=info,bindle_bundler=info,bindle_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
